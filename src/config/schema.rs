//! Configuration schema for fwctl.
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "localhost"
//! port = 10350
//! # url = "https://tilt.internal:8443"   # wins over host/port
//! # token = "..."
//! # timeout_secs = 30
//! # namespace = "dev"
//!
//! [output]
//! # format = "yaml"
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 10350;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Full server URL; overrides host and port when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout in seconds (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Namespace for created objects; cluster-scoped when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            url: None,
            token: None,
            timeout_secs: None,
            namespace: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default for `-o/--output`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
