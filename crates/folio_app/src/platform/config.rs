use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_engine::FetchSettings;
use folio_logging::folio_info;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "folio.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Optional overrides for the fetch settings, read from a RON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub account: Option<String>,
    pub api_base: Option<String>,
    pub user_agent: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_bytes: Option<u64>,
}

impl FileConfig {
    pub fn apply(self, mut settings: FetchSettings) -> FetchSettings {
        if let Some(account) = self.account {
            settings.account = account;
        }
        if let Some(api_base) = self.api_base {
            settings.api_base = api_base;
        }
        if let Some(user_agent) = self.user_agent {
            settings.user_agent = user_agent;
        }
        if let Some(ms) = self.connect_timeout_ms {
            settings.connect_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.request_timeout_ms {
            settings.request_timeout = Duration::from_millis(ms);
        }
        if let Some(max_bytes) = self.max_bytes {
            settings.max_bytes = max_bytes;
        }
        settings
    }
}

/// Loads `explicit`, or `./folio.ron` when it exists. A missing default file yields defaults.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    folio_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.ron");
        fs::write(&path, r#"(account: Some("octo"), request_timeout_ms: Some(1500))"#).unwrap();

        let config = load(Some(&path)).unwrap();
        let settings = config.apply(FetchSettings::default());
        assert_eq!(settings.account, "octo");
        assert_eq!(settings.request_timeout, Duration::from_millis(1500));
        assert_eq!(settings.api_base, FetchSettings::default().api_base);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load(Some(&temp.path().join("absent.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(account: 12").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
