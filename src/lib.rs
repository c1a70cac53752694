//! fwctl: a human-friendly CLI for creating file watches in a running control plane.

pub mod analytics;
pub mod api;
pub mod config;
pub mod create;
pub mod error;
pub mod filewatch;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiClient, DynamicObject, ResourceApi};
pub use error::{FwctlError, Result};
pub use filewatch::{FileWatch, WatchRequest, WorkingDir};
