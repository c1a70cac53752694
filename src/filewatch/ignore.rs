use super::{IgnoreDef, WorkingDir};
use std::path::PathBuf;

/// Accumulates `--ignore` values into a single [`IgnoreDef`].
///
/// Patterns are only ever appended. `build` consumes the builder, so the
/// resulting spec cannot be changed afterwards.
#[derive(Debug, Clone)]
pub struct IgnoreSpecBuilder {
    base_path: PathBuf,
    patterns: Vec<String>,
}

impl IgnoreSpecBuilder {
    pub fn new(cwd: &WorkingDir) -> Self {
        Self::with_base_path(cwd.path())
    }

    /// Start from a base path that is already known, e.g. one read back from the server.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            patterns: Vec::new(),
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> IgnoreDef {
        IgnoreDef {
            base_path: self.base_path,
            patterns: self.patterns,
        }
    }
}
