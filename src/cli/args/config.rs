//! `config` command arguments.

use clap::{Parser, Subcommand};

#[derive(Parser, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommand {
    /// Print the configuration file path
    Path,
    /// Show the effective configuration
    Show,
    /// Write a configuration file with defaults
    Init,
}
