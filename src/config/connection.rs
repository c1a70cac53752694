//! Resolution of the API server connection.
//!
//! Priority: command-line flag > environment variable > config file > default.
//! Flags and environment variables arrive merged in [`ConnectionOverrides`].

use crate::api::client::Connection;
use crate::config::schema::ServerConfig;
use crate::error::{FwctlError, Result};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOverrides {
    pub server: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub token: Option<String>,
    pub namespace: Option<String>,
}

pub fn resolve_connection(
    config: &ServerConfig,
    overrides: &ConnectionOverrides,
) -> Result<Connection> {
    let host_or_port_given = overrides.host.is_some() || overrides.port.is_some();
    let raw = match (&overrides.server, &config.url) {
        (Some(server), _) => server.clone(),
        (None, Some(url)) if !host_or_port_given => url.clone(),
        _ => format!(
            "http://{}:{}",
            overrides.host.as_deref().unwrap_or(&config.host),
            overrides.port.unwrap_or(config.port)
        ),
    };

    let server = Url::parse(&raw)
        .map_err(|e| FwctlError::Config(format!("Invalid server URL '{}': {}", raw, e)))?;
    if !matches!(server.scheme(), "http" | "https") {
        return Err(FwctlError::Config(format!(
            "Unsupported scheme '{}' in server URL '{}'",
            server.scheme(),
            raw
        )));
    }

    let token = non_empty(overrides.token.clone().or_else(|| config.token.clone()));
    let namespace = non_empty(
        overrides
            .namespace
            .clone()
            .or_else(|| config.namespace.clone()),
    );
    let timeout = config
        .timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    tracing::debug!("Using API server {}", server);

    Ok(Connection {
        server,
        token,
        timeout,
        namespace,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
