//! Process configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use electrovault_observability::LogFormat;

pub const DATA_FILE_VAR: &str = "ELECTROVAULT_DATA_FILE";
pub const BIND_ADDR_VAR: &str = "ELECTROVAULT_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ELECTROVAULT_LOG_FORMAT";

pub const DEFAULT_DATA_FILE: &str = "electro_inventory.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backing JSON file for the inventory.
    pub data_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind_addr: default_bind_addr(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl ApiConfig {
    /// Read configuration from the process environment.
    ///
    /// Returns the config plus warnings for values that were present but
    /// invalid (those fall back to their defaults). Logging is not yet set up
    /// when this runs, so the caller logs them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(path) = lookup(DATA_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warnings.push(format!(
                    "{BIND_ADDR_VAR}={raw:?} is invalid ({e}); using {DEFAULT_BIND_ADDR}"
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using json")),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let (config, warnings) = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.data_file, PathBuf::from("electro_inventory.json"));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(warnings.is_empty());
    }

    #[test]
    fn values_are_read_from_lookup() {
        let (config, warnings) = ApiConfig::from_lookup(lookup_from(&[
            (DATA_FILE_VAR, "/var/lib/electrovault/inventory.json"),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (LOG_FORMAT_VAR, "compact"),
        ]));
        assert_eq!(config.data_file, PathBuf::from("/var/lib/electrovault/inventory.json"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let (config, warnings) = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "not-an-addr"),
            (LOG_FORMAT_VAR, "xml"),
        ]));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains(BIND_ADDR_VAR));
    }
}
