use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// JSON array of listings preloaded into the in-memory store.
    pub seed_listings: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("SWAPSAFE_LISTEN_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .context("SWAPSAFE_LISTEN_ADDR must be a socket address")?;

        let log_level = lookup("SWAPSAFE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let seed_listings = lookup("SWAPSAFE_SEED_LISTINGS")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            seed_listings,
        })
    }
}
