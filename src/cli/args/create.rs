//! `create` command arguments.

use clap::{Parser, Subcommand};

use super::global::ConnectionArgs;

const FILEWATCH_LONG_ABOUT: &str = "\
Create a FileWatch in a running session.

First supply the name of the watch so you can reference it later, then the
paths to watch. All paths are watched recursively.

On its own, a FileWatch is an object that watches a set of files and updates
its status with the most recent file changed. It is intended to be combined
with other objects to trigger events when a file changes.";

#[derive(Parser, Clone, Debug)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub resource: CreateResource,
}

#[derive(Subcommand, Clone, Debug)]
pub enum CreateResource {
    /// Create a filewatch in a running session
    #[command(
        visible_alias = "fw",
        long_about = FILEWATCH_LONG_ABOUT,
        after_help = "Example:\n  fwctl create fw src-and-web src web --ignore=web/node_modules"
    )]
    Filewatch(CreateFileWatchArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct CreateFileWatchArgs {
    /// Name of the filewatch
    pub name: String,

    /// Paths to watch; relative paths are resolved against the current directory
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Patterns to ignore, using .dockerignore syntax relative to the current
    /// directory. Repeatable; commas separate multiple patterns
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Output format: name, json or yaml
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl CreateFileWatchArgs {
    /// Every `--ignore` value split on commas. A wholly empty value adds
    /// nothing; empty fields inside a list are kept.
    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .iter()
            .filter(|value| !value.is_empty())
            .flat_map(|value| value.split(','))
            .map(str::to_string)
            .collect()
    }
}
