//! Configuration parsing – reads a KEY=VALUE file (`rdk.conf`).
//!
//! Every key is optional; the site server runs with built-in defaults when
//! the file is absent.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Environment variable that points at the config file.
pub const CONFIG_ENV: &str = "RDK_CONFIG";

/// Tracing filter used when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "rdk_web=info,tower_http=info";

/// Site server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ── http ─────────────────────────────────────────────────────────
    /// Overrides the address from `[package.metadata.leptos]`.
    pub site_addr: Option<SocketAddr>,
    /// Overrides the directory the compiled site is served from.
    pub site_root: Option<PathBuf>,

    // ── logging ──────────────────────────────────────────────────────
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_addr: None,
            site_root: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/rdk/rdk.conf"
    }

    /// Path from `RDK_CONFIG`, falling back to [`Config::default_path`].
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::default_path()))
    }
}

/// Load the config at `path`, or the defaults if the file does not exist.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored; values that fail to
/// parse keep their default.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_map(&parse_conf(&text));
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let get = |key: &str| -> Option<String> {
        map.get(key).cloned().filter(|v| !v.is_empty())
    };

    let site_addr = get("SITE_ADDR").and_then(|v| match v.parse::<SocketAddr>() {
        Ok(addr) => Some(addr),
        Err(e) => {
            warn!("Ignoring SITE_ADDR={v:?}: {e}");
            None
        }
    });

    Config {
        site_addr,
        site_root: get("SITE_ROOT").map(PathBuf::from),
        log_filter: get("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────
