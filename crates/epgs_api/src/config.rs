//! crates/epgs_api/src/config.rs
//! HTTP adapter configuration. Grounded on `aegis-rpc::config::Config`'s
//! plain, field-documented struct — no builder macro, no env-var magic
//! beyond the three values a thin adapter actually needs.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Default output root for `/run` requests that omit `output_root`.
    pub default_output_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080, default_output_root: PathBuf::from("output") }
    }
}

impl Config {
    /// Read overrides from `EPGS_API_HOST` / `EPGS_API_PORT` /
    /// `EPGS_API_OUTPUT_ROOT`, falling back to [`Config::default`].
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("EPGS_API_HOST") {
            cfg.host = host;
        }
        if let Ok(port) = std::env::var("EPGS_API_PORT") {
            if let Ok(port) = port.parse() {
                cfg.port = port;
            }
        }
        if let Ok(root) = std::env::var("EPGS_API_OUTPUT_ROOT") {
            cfg.default_output_root = PathBuf::from(root);
        }
        cfg
    }
}
