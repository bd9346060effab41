use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::pages::RedirectKind;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,

    /// Directory served under `/assets`
    pub assets_dir: PathBuf,

    /// Status used for the entry-point redirects
    pub redirect: RedirectKind,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            assets_dir: PathBuf::from("assets"),
            redirect: RedirectKind::default(),
            log_filter: String::from("spot_prices_web=info,tower_http=info"),
        }
    }
}

impl Config {
    /// Reads the YAML file named by `SPOT_PRICES_CONFIG` if set, then applies
    /// the `BIND_ADDRESS` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("SPOT_PRICES_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        if let Ok(bind) = std::env::var("BIND_ADDRESS") {
            config.bind = bind
                .parse()
                .with_context(|| format!("invalid BIND_ADDRESS: {bind}"))?;
        }
        Ok(config)
    }

    pub fn from_yaml_file(path: &str) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("parsing config {path}"))
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
