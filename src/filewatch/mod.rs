//! The FileWatch resource and the rules for building one from command-line input.
//!
//! A FileWatch names a set of paths to watch recursively plus the patterns to
//! ignore beneath them. Everything in this module is pure: the only input from
//! the environment is the [`WorkingDir`] captured once per invocation.

mod builder;
mod ignore;
mod paths;

pub use builder::build_file_watch;
pub use ignore::IgnoreSpecBuilder;
pub use paths::{resolve_paths, WorkingDir};

use crate::error::{FwctlError, Result};
use std::path::{Path, PathBuf};

pub const API_GROUP: &str = "tilt.dev";
pub const API_VERSION: &str = "v1alpha1";
pub const KIND: &str = "FileWatch";
pub const RESOURCE: &str = "filewatches";

/// Raw command-line input for a single create invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRequest {
    name: String,
    path_args: Vec<String>,
    ignore_values: Vec<String>,
}

impl WatchRequest {
    pub fn new(name: impl Into<String>, path_args: Vec<String>, ignore_values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path_args,
            ignore_values,
        }
    }

    /// Split positional arguments into a name and the paths that follow it.
    pub fn from_args(args: &[String], ignore_values: Vec<String>) -> Result<Self> {
        let (name, path_args) = args
            .split_first()
            .ok_or_else(|| FwctlError::InvalidArgument("a filewatch name is required".into()))?;
        Ok(Self::new(name.clone(), path_args.to_vec(), ignore_values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_args(&self) -> &[String] {
        &self.path_args
    }

    pub fn ignore_values(&self) -> &[String] {
        &self.ignore_values
    }
}

/// A base directory plus ignore-file style patterns relative to it.
///
/// Only [`IgnoreSpecBuilder::build`] produces one, and it has no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreDef {
    base_path: PathBuf,
    patterns: Vec<String>,
}

impl IgnoreDef {
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWatchSpec {
    watched_paths: Vec<PathBuf>,
    ignores: Vec<IgnoreDef>,
}

impl FileWatchSpec {
    pub fn new(watched_paths: Vec<PathBuf>, ignores: Vec<IgnoreDef>) -> Self {
        Self {
            watched_paths,
            ignores,
        }
    }

    pub fn watched_paths(&self) -> &[PathBuf] {
        &self.watched_paths
    }

    pub fn ignores(&self) -> &[IgnoreDef] {
        &self.ignores
    }
}

/// The canonical watch resource submitted to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWatch {
    name: String,
    spec: FileWatchSpec,
}

impl FileWatch {
    pub fn new(name: impl Into<String>, spec: FileWatchSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &FileWatchSpec {
        &self.spec
    }

    /// `group/version` as carried in the `apiVersion` field.
    pub fn api_version() -> String {
        format!("{}/{}", API_GROUP, API_VERSION)
    }
}
