//! Utility modules for fwctl.

pub mod colors;

pub use colors::*;
