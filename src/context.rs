use fwctl::api::client::Connection;
use fwctl::config::{resolve_connection, Config, ConfigLoader, ConnectionOverrides};
use fwctl::error::Result;

/// Application context: the loaded configuration, combined with flags and
/// environment variables per command.
pub struct AppContext {
    pub config: Config,
}

impl AppContext {
    pub fn new() -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self { config })
    }

    /// Priority: flag / ENV > config > default
    pub fn connection(&self, overrides: &ConnectionOverrides) -> Result<Connection> {
        resolve_connection(&self.config.server, overrides)
    }
}
