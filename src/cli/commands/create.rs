//! `create` command implementation.

use crate::cli::args::{CreateArgs, CreateFileWatchArgs, CreateResource};
use crate::context::AppContext;
use fwctl::analytics::{flush_with_timeout, Analytics, Tags, TracingAnalytics};
use fwctl::create::create_file_watch;
use fwctl::error::Result;
use fwctl::output::Printer;
use fwctl::{ApiClient, WatchRequest, WorkingDir};
use std::time::Duration;

const ANALYTICS_FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn run_create(args: CreateArgs, ctx: &AppContext) -> Result<()> {
    match args.resource {
        CreateResource::Filewatch(args) => run_create_filewatch(args, ctx).await,
    }
}

pub async fn run_create_filewatch(args: CreateFileWatchArgs, ctx: &AppContext) -> Result<()> {
    let analytics = TracingAnalytics::new();
    analytics.incr("cmd.create-filewatch", Tags::new());

    let result = create_filewatch(args, ctx).await;

    flush_with_timeout(&analytics, ANALYTICS_FLUSH_TIMEOUT).await;
    result
}

async fn create_filewatch(args: CreateFileWatchArgs, ctx: &AppContext) -> Result<()> {
    // Resolve the printer first so a bad -o fails before anything is created.
    let format = args
        .output
        .as_deref()
        .or(ctx.config.output.format.as_deref());
    let printer = Printer::from_flag(format)?;
    tracing::debug!("Output format: {}", printer.format());

    let connection = ctx.connection(&args.connection.to_overrides())?;
    let client = ApiClient::new(&connection)?;

    let ignores = args.ignore_patterns();
    let request = WatchRequest::new(args.name, args.paths, ignores);
    let cwd = WorkingDir::capture()?;

    let mut stdout = std::io::stdout();
    create_file_watch(
        &client,
        &request,
        &cwd,
        connection.namespace.as_deref(),
        &printer,
        &mut stdout,
    )
    .await?;

    Ok(())
}
