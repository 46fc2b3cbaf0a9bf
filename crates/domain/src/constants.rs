//! API constants
//!
//! Path segments of the Config API resource hierarchy, plus the fixed
//! protocol literals shared by every request.

// Protocol
pub const API_VERSION: &str = "v1beta";
pub const DEFAULT_BASE_URL: &str = "https://platform.segmentapis.com";
pub const MEDIA_TYPE: &str = "application/json";

// Resource collections
pub const WORKSPACES_ENDPOINT: &str = "workspaces";
pub const SOURCES_ENDPOINT: &str = "sources";
pub const DESTINATIONS_ENDPOINT: &str = "destinations";
pub const DESTINATION_FILTERS_ENDPOINT: &str = "filters";
pub const TRACKING_PLANS_ENDPOINT: &str = "tracking-plans";
pub const SOURCE_CONNECTIONS_ENDPOINT: &str = "source-connections";
pub const SCHEMA_CONFIG_ENDPOINT: &str = "schema-config";

// Update masks (fixed allow-lists sent with every update)
pub const DESTINATION_FILTER_UPDATE_PATHS: [&str; 5] =
    ["if", "actions", "title", "description", "enabled"];

pub const TRACKING_PLAN_UPDATE_PATHS: [&str; 2] =
    ["tracking_plan.display_name", "tracking_plan.rules"];

pub const SOURCE_CONFIG_UPDATE_PATHS: [&str; 12] = [
    "schema_config.allow_unplanned_track_events",
    "schema_config.allow_unplanned_identify_traits",
    "schema_config.allow_unplanned_group_traits",
    "schema_config.forwarding_blocked_events_to",
    "schema_config.allow_unplanned_track_event_properties",
    "schema_config.allow_track_event_on_violations",
    "schema_config.allow_identify_traits_on_violations",
    "schema_config.allow_group_traits_on_violations",
    "schema_config.forwarding_violations_to",
    "schema_config.common_track_event_on_violations",
    "schema_config.common_identify_event_on_violations",
    "schema_config.common_group_event_on_violations",
];
