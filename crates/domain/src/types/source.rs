//! Source records and source schema configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event-producing integration registered under a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Resource name, e.g. `workspaces/myworkspace/sources/js`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Catalog entry this source was created from, e.g. `catalog/sources/javascript`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub catalog_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub write_keys: Vec<String>,
    #[serde(default)]
    pub library_config: LibraryConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Settings of the tracking library attached to a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub metrics_enabled: bool,
    #[serde(default)]
    pub retry_queue: bool,
    #[serde(default)]
    pub cross_domain_id_enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_host: String,
}

/// Response of the source collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceList {
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// What happens to a common event that violates the tracking plan.
///
/// `OmitProperties` only applies to track events; `OmitTraits` only to
/// identify and group events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommonEventSetting {
    Allow,
    OmitProperties,
    OmitTraits,
    Block,
}

/// Schema configuration of a source (`.../sources/{src}/schema-config`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default)]
    pub allow_unplanned_track_events: bool,
    #[serde(default)]
    pub allow_unplanned_identify_traits: bool,
    #[serde(default)]
    pub allow_unplanned_group_traits: bool,
    #[serde(default)]
    pub allow_track_event_on_violations: bool,
    #[serde(default)]
    pub allow_identify_traits_on_violations: bool,
    #[serde(default)]
    pub allow_group_traits_on_violations: bool,
    #[serde(default, rename = "allow_unplanned_track_event_properties")]
    pub allow_unplanned_track_events_properties: bool,
    #[serde(default)]
    pub allow_track_properties_on_violations: bool,
    /// Source name that receives blocked events
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub forwarding_blocked_events_to: String,
    /// Source name that receives events with violations
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub forwarding_violations_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_track_event_on_violations: Option<CommonEventSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_identify_event_on_violations: Option<CommonEventSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_group_event_on_violations: Option<CommonEventSetting>,
}
