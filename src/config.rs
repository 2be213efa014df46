use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: IpAddr,
    pub listen_port: u16,
    pub pasv_address: Ipv4Addr, // Address advertised in 227 replies
    pub repository: PathBuf,
    pub idle_timeout_secs: Option<u64>,
    pub pasv_accept_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            listen_port: 2121,
            pasv_address: Ipv4Addr::LOCALHOST,
            repository: PathBuf::from("."),
            idle_timeout_secs: None,
            pasv_accept_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }

    pub fn pasv_accept_timeout(&self) -> Option<Duration> {
        self.pasv_accept_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }
}
