//! CLI argument definitions and subcommands.
//!
//! - [`global`]: top-level CLI, STYLES and the shared connection flags
//! - [`create`]: `create` subcommand and its resource kinds
//! - [`config`]: `config` subcommand

mod config;
mod create;
mod global;

pub use config::{ConfigArgs, ConfigCommand};
pub use create::{CreateArgs, CreateFileWatchArgs, CreateResource};
pub use global::{parse_cli, Commands};
