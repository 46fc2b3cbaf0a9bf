//! Request envelopes, update masks and the API error body
//!
//! Envelopes borrow the payload they wrap; they exist only to give the
//! request body its wire shape (`{"filter": ..., "update_mask": ...}`).

use serde::{Deserialize, Serialize};

use super::destination::Destination;
use super::filter::DestinationFilter;
use super::source::{Source, SourceConfig};
use super::tracking_plan::TrackingPlan;

/// Field paths an update is allowed to modify.
///
/// Fields outside the mask are ignored server-side even when present in
/// the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMask {
    #[serde(default)]
    pub paths: Vec<String>,
}

impl UpdateMask {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }
}

#[derive(Debug, Serialize)]
pub struct SourceCreateRequest<'a> {
    pub source: &'a Source,
}

#[derive(Debug, Serialize)]
pub struct SourceConfigUpdateRequest<'a> {
    #[serde(rename = "schema_config")]
    pub config: &'a SourceConfig,
    pub update_mask: UpdateMask,
}

#[derive(Debug, Serialize)]
pub struct DestinationCreateRequest<'a> {
    pub destination: &'a Destination,
}

#[derive(Debug, Serialize)]
pub struct DestinationUpdateRequest<'a> {
    pub destination: &'a Destination,
    pub update_mask: UpdateMask,
}

/// Body of both filter create and filter update calls
#[derive(Debug, Serialize)]
pub struct DestinationFilterRequest<'a> {
    pub filter: &'a DestinationFilter,
    pub update_mask: UpdateMask,
}

#[derive(Debug, Serialize)]
pub struct TrackingPlanCreateRequest<'a> {
    pub tracking_plan: &'a TrackingPlan,
}

#[derive(Debug, Serialize)]
pub struct TrackingPlanUpdateRequest<'a> {
    pub update_mask: UpdateMask,
    pub tracking_plan: &'a TrackingPlan,
}

#[derive(Debug, Serialize)]
pub struct TrackingPlanSourceConnectionCreateRequest {
    pub source_name: String,
}

/// Structured error body returned with 400 and 500 responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, rename = "error")]
    pub message: String,
    #[serde(default)]
    pub code: i64,
}
