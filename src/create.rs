//! Build a FileWatch from command-line input, create it, and print the result.

use crate::api::{submit, DynamicObject, ResourceApi};
use crate::error::{FwctlError, Result};
use crate::filewatch::{build_file_watch, WatchRequest, WorkingDir};
use crate::output::Printer;
use std::io::Write;

/// Run the whole create pipeline against `api`.
///
/// The FileWatch is fully built before the single create call. A failure to
/// print after a successful create is reported as
/// [`FwctlError::CreatedButNotRendered`] so it is never mistaken for a failed
/// create.
pub async fn create_file_watch<A: ResourceApi>(
    api: &A,
    request: &WatchRequest,
    cwd: &WorkingDir,
    namespace: Option<&str>,
    printer: &Printer,
    out: &mut dyn Write,
) -> Result<DynamicObject> {
    let file_watch = build_file_watch(request, cwd)?;
    let created = submit(api, &file_watch, namespace).await?;

    if let Err(source) = printer.render(&created, out) {
        let resource = created
            .qualified_name()
            .unwrap_or_else(|| format!("filewatch \"{}\"", file_watch.name()));
        return Err(FwctlError::CreatedButNotRendered { resource, source });
    }

    Ok(created)
}
