//! Domain types mirroring the Config API's JSON schema
//!
//! Every resource is addressed by a hierarchical name such as
//! `workspaces/{ws}/sources/{src}`. Names are kept as opaque strings and
//! preserved verbatim; [`resource_id`] is the only structural helper.

pub mod destination;
pub mod filter;
pub mod requests;
pub mod source;
pub mod tracking_plan;
pub mod workspace;

pub use destination::{Destination, DestinationConfig, DestinationList};
pub use filter::{
    ActionKind, DestinationFilter, DestinationFilterList, EventDescription, EventFieldSelection,
    FilterAction, FilterActions, SampleEvent,
};
pub use requests::{
    ApiErrorBody, DestinationCreateRequest, DestinationFilterRequest, DestinationUpdateRequest,
    SourceConfigUpdateRequest, SourceCreateRequest, TrackingPlanCreateRequest,
    TrackingPlanSourceConnectionCreateRequest, TrackingPlanUpdateRequest, UpdateMask,
};
pub use source::{CommonEventSetting, LibraryConfig, Source, SourceConfig, SourceList};
pub use tracking_plan::{
    Event, Properties, Property, RuleProperties, Rules, RuleSet, TrackingPlan, TrackingPlanList,
    TrackingPlanSourceConnection, TrackingPlanSourceConnectionList,
};
pub use workspace::{Workspace, WorkspaceList};

/// Last path segment of a hierarchical resource name.
///
/// `workspaces/ws/sources/js/destinations/ga/filters/df_1` yields `df_1`; a
/// name without separators is returned unchanged.
pub fn resource_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
