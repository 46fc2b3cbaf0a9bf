//! # Segment Config Domain
//!
//! Wire data model for the Segment Config API.
//!
//! This crate contains:
//! - Resource records (workspaces, sources, destinations, filters, tracking
//!   plans) mirroring the API's JSON schema
//! - The polymorphic destination-filter action model and its codec
//! - Request envelopes, list wrappers and update masks
//! - Path segment constants and domain error types
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O: every type here is plain data plus (de)serialization

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
