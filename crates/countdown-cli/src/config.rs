//! CLI configuration file.
//!
//! A JSON object; every field is optional. Command-line flags override it.
//!
//! ```json
//! {
//!   "data_file": "shared_store.json",
//!   "bindings_file": "widget_config.json",
//!   "scheme": "app",
//!   "locale": "zh"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "countdown.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dump of the host's shared store (`event_*` keys and `all_events`).
    pub data_file: PathBuf,
    /// Surface bindings, one `widget_event_{id}` key per surface.
    pub bindings_file: PathBuf,
    /// Deep-link scheme.
    pub scheme: String,
    /// Display language tag (zh, en).
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("shared_store.json"),
            bindings_file: PathBuf::from("widget_config.json"),
            scheme: countdown_engine::render::DEFAULT_SCHEME.to_string(),
            locale: "zh".to_string(),
        }
    }
}

impl Config {
    /// Load `path`, or the default file if it exists.
    ///
    /// An explicitly named file must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                tracing::debug!("no {} found, using built-in configuration", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))
            }
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = serde_json::from_str(r#"{"locale": "en"}"#).unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.scheme, "app");
        assert_eq!(config.data_file, PathBuf::from("shared_store.json"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("countdown-cli-no-such-config.json");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
