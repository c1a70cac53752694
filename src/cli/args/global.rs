//! Global CLI structures and shared argument groups.

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::Styles;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use fwctl::config::ConnectionOverrides;

use super::config::ConfigArgs;
use super::create::CreateArgs;

// Configures colored help menu colors (similar to uv)
pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Global CLI structure
#[derive(Parser)]
#[command(name = "fwctl")]
#[command(about = "Create file watches in a running control plane")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an object in a running session
    Create(CreateArgs),
    /// Inspect or initialize the configuration file
    Config(ConfigArgs),
}

/// Flags for reaching the API server.
#[derive(Args, Clone, Debug, Default)]
pub struct ConnectionArgs {
    /// Full API server URL (takes precedence over --host and --port)
    #[arg(long, env = "FWCTL_SERVER")]
    pub server: Option<String>,

    /// Host of the API server
    #[arg(long, env = "FWCTL_HOST")]
    pub host: Option<String>,

    /// Port of the API server
    #[arg(long, env = "FWCTL_PORT")]
    pub port: Option<u16>,

    /// Bearer token for the API server
    #[arg(long, env = "FWCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Namespace to create objects in (cluster-scoped when empty)
    #[arg(short = 'n', long, env = "FWCTL_NAMESPACE")]
    pub namespace: Option<String>,
}

impl ConnectionArgs {
    pub fn to_overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            server: self.server.clone(),
            host: self.host.clone(),
            port: self.port,
            token: self.token.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

/// Parse CLI with colored styles
pub fn parse_cli() -> Cli {
    let cmd = Cli::command().styles(STYLES).color(clap::ColorChoice::Auto);
    let matches = cmd.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
