mod cli;
mod context;

use cli::{parse_cli, Commands};
use context::AppContext;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load context
    let ctx = AppContext::new()?;

    // Dispatch to command
    match cli.command {
        Commands::Create(args) => {
            cli::commands::run_create(args, &ctx).await?;
        }
        Commands::Config(args) => {
            cli::commands::run_config(args, &ctx)?;
        }
    }

    Ok(())
}
