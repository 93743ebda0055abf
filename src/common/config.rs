use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::common::ConfigError;
use crate::content::PROJECT_NAME;

pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Runtime settings for the site server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub site_title: String,
}

impl SiteConfig {
    /// Reads `BIND_ADDR`, `STATIC_DIR` and `SITE_TITLE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value: raw, source })?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            site_title: get("SITE_TITLE").unwrap_or_else(|| PROJECT_NAME.to_string()),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            site_title: PROJECT_NAME.to_string(),
        }
    }
}
