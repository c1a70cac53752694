use crate::error::{FwctlError, Result};
use std::path::{Component, Path, PathBuf};

/// Working directory snapshot taken once per invocation.
///
/// Watched paths and ignore base paths are both resolved against the same
/// snapshot, so they cannot disagree even if the process cwd changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir(PathBuf);

impl WorkingDir {
    /// Capture the current working directory of the process.
    pub fn capture() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(FwctlError::Environment)?;
        tracing::debug!("Captured working directory {}", cwd.display());
        Ok(Self(cwd))
    }

    /// Use an explicit directory instead of the process cwd. Must be absolute.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(FwctlError::InvalidArgument(format!(
                "working directory must be absolute: {}",
                path.display()
            )));
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Absolute paths pass through untouched; relative ones are joined onto
    /// the snapshot and cleaned. Purely syntactic: nothing is checked on disk.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            clean(&self.0.join(path))
        }
    }
}

/// Lexical cleanup of a joined path: `.` components and trailing separators
/// are dropped and `..` removes the preceding component. `..` directly under
/// the root stays at the root. Symlinks are not consulted.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Resolve every raw path, keeping order and duplicates.
pub fn resolve_paths(raw: &[String], cwd: &WorkingDir) -> Vec<PathBuf> {
    raw.iter().map(|p| cwd.resolve(p)).collect()
}
