use super::{resolve_paths, FileWatch, FileWatchSpec, IgnoreSpecBuilder, WatchRequest, WorkingDir};
use crate::error::{FwctlError, Result};

/// Interpret a [`WatchRequest`] as the FileWatch to create.
///
/// All ignore values land in one ignore spec rooted at `cwd`, even when there
/// are none.
pub fn build_file_watch(request: &WatchRequest, cwd: &WorkingDir) -> Result<FileWatch> {
    if request.name().is_empty() {
        return Err(FwctlError::InvalidArgument(
            "filewatch name must not be empty".into(),
        ));
    }
    if request.path_args().is_empty() {
        return Err(FwctlError::InvalidArgument(format!(
            "filewatch \"{}\" needs at least one path to watch",
            request.name()
        )));
    }

    let watched_paths = resolve_paths(request.path_args(), cwd);
    let ignores = vec![IgnoreSpecBuilder::new(cwd)
        .patterns(request.ignore_values())
        .build()];

    tracing::debug!(
        "Built filewatch {} with {} path(s) and {} ignore pattern(s)",
        request.name(),
        watched_paths.len(),
        request.ignore_values().len()
    );

    Ok(FileWatch::new(
        request.name(),
        FileWatchSpec::new(watched_paths, ignores),
    ))
}
