//! Resource endpoints
//!
//! Each submodule adds the operations for one resource family to
//! [`ApiClient`](crate::ApiClient). Methods compose the resource path from
//! the client's workspace plus caller-supplied names, wrap payloads in the
//! envelope the API expects, and decode the typed result.

mod destinations;
mod filters;
mod sources;
mod tracking_plans;
mod workspaces;
