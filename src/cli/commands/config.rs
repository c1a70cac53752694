//! `config` command implementation.

use crate::cli::args::{ConfigArgs, ConfigCommand};
use crate::context::AppContext;
use fwctl::config::{ConfigLoader, ConnectionOverrides};
use fwctl::error::{FwctlError, Result};
use fwctl::utils::{header, hint, success, warning};

pub fn run_config(args: ConfigArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        ConfigCommand::Path => {
            let path = ConfigLoader::config_path()
                .ok_or_else(|| FwctlError::Config("Cannot determine config path".into()))?;
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            match ConfigLoader::config_path() {
                Some(path) if path.exists() => header(&format!("# {}", path.display())),
                Some(path) => warning(&format!(
                    "No config file at {}, showing defaults",
                    path.display()
                )),
                None => warning("Cannot determine config path, showing defaults"),
            }
            print!("{}", toml::to_string_pretty(&ctx.config)?);

            // Environment variables still apply on top of the file.
            let connection = ctx.connection(&ConnectionOverrides {
                server: std::env::var("FWCTL_SERVER").ok(),
                host: std::env::var("FWCTL_HOST").ok(),
                port: std::env::var("FWCTL_PORT").ok().and_then(|p| p.parse().ok()),
                token: None,
                namespace: std::env::var("FWCTL_NAMESPACE").ok(),
            })?;
            println!();
            println!("# effective server: {}", connection.server);
        }
        ConfigCommand::Init => {
            let path = ConfigLoader::init()?;
            success(&format!("Created config file at {}", path.display()));
            hint("Edit the [server] section to point at your API server");
        }
    }

    Ok(())
}
