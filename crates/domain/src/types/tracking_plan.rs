//! Tracking plans and their source connections
//!
//! Rules are JSON-schema documents; only the parts the Config API shapes
//! explicitly are typed, everything open-ended stays a [`Value`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema contract describing allowed event shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingPlan {
    /// Resource name, e.g. `workspaces/ws/tracking-plans/rs_123`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Rules grouped by the call type they constrain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, skip_serializing_if = "Rules::is_empty")]
    pub global: Rules,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Rules::is_empty")]
    pub identify: Rules,
    #[serde(default, skip_serializing_if = "Rules::is_empty")]
    pub group: Rules,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default, rename = "$schema", skip_serializing_if = "String::is_empty")]
    pub schema: String,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "RuleProperties::is_empty")]
    pub properties: RuleProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Rules {
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
            && self.kind.is_empty()
            && self.properties.is_empty()
            && self.required.is_empty()
    }
}

/// The three event sections a rule may constrain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleProperties {
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub context: Properties,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub traits: Properties,
}

impl RuleProperties {
    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.properties.is_empty() && self.traits.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl Properties {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.required.is_empty() && self.kind.is_empty()
    }
}

/// JSON-schema description of a single property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Either a type name or a list of type names
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
    #[serde(default, rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(default, rename = "additionalItems", skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<Box<Property>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    #[serde(default, rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Value>,
    #[serde(default, rename = "patternProperties", skip_serializing_if = "BTreeMap::is_empty")]
    pub pattern_properties: BTreeMap<String, Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Allowed values; `null` is a legal member
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<Option<String>>,
}

/// One planned track event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Rules::is_empty")]
    pub rules: Rules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// Response of the tracking plan collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingPlanList {
    #[serde(default)]
    pub tracking_plans: Vec<TrackingPlan>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// Link between a tracking plan and a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPlanSourceConnection {
    /// Full source name, including the workspace path
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tracking_plan_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPlanSourceConnectionList {
    #[serde(default)]
    pub connections: Vec<TrackingPlanSourceConnection>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}
