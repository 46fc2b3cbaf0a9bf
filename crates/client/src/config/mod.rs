//! Client configuration
//!
//! [`ClientConfig`] holds everything needed to reach a workspace; the
//! [`loader`] functions build one from the environment or a file.

pub mod loader;
mod settings;

// Re-export commonly used items
pub use loader::{load_from_env, load_from_file};
pub use settings::{ClientConfig, DEFAULT_TIMEOUT_SECS};
