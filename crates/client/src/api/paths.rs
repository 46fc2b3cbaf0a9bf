//! Resource path builders
//!
//! Paths are relative to `{base_url}/{API_VERSION}/` and double as the
//! resource names the API hands back, e.g. `workspaces/ws/sources/js`.

use segment_config_domain::constants::{
    DESTINATIONS_ENDPOINT, DESTINATION_FILTERS_ENDPOINT, SCHEMA_CONFIG_ENDPOINT,
    SOURCES_ENDPOINT, SOURCE_CONNECTIONS_ENDPOINT, TRACKING_PLANS_ENDPOINT, WORKSPACES_ENDPOINT,
};

pub fn workspaces() -> String {
    WORKSPACES_ENDPOINT.to_string()
}

pub fn workspace(ws: &str) -> String {
    format!("{WORKSPACES_ENDPOINT}/{ws}")
}

pub fn sources(ws: &str) -> String {
    format!("{}/{SOURCES_ENDPOINT}", workspace(ws))
}

/// Also the full resource name of the source
pub fn source(ws: &str, src: &str) -> String {
    format!("{}/{src}", sources(ws))
}

pub fn source_config(ws: &str, src: &str) -> String {
    format!("{}/{SCHEMA_CONFIG_ENDPOINT}", source(ws, src))
}

pub fn destinations(ws: &str, src: &str) -> String {
    format!("{}/{DESTINATIONS_ENDPOINT}", source(ws, src))
}

pub fn destination(ws: &str, src: &str, dest: &str) -> String {
    format!("{}/{dest}", destinations(ws, src))
}

pub fn destination_filters(ws: &str, src: &str, dest: &str) -> String {
    format!("{}/{DESTINATION_FILTERS_ENDPOINT}", destination(ws, src, dest))
}

pub fn destination_filter(ws: &str, src: &str, dest: &str, filter_id: &str) -> String {
    format!("{}/{filter_id}", destination_filters(ws, src, dest))
}

pub fn tracking_plans(ws: &str) -> String {
    format!("{}/{TRACKING_PLANS_ENDPOINT}", workspace(ws))
}

pub fn tracking_plan(ws: &str, plan_id: &str) -> String {
    format!("{}/{plan_id}", tracking_plans(ws))
}

pub fn source_connections(ws: &str, plan_id: &str) -> String {
    format!("{}/{SOURCE_CONNECTIONS_ENDPOINT}", tracking_plan(ws, plan_id))
}

pub fn source_connection(ws: &str, plan_id: &str, src: &str) -> String {
    format!("{}/{src}", source_connections(ws, plan_id))
}
