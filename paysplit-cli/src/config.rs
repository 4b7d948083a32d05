//! Optional TOML defaults for the `paysplit` command.
//!
//! ```toml
//! country = "sco"
//! format = "json"
//! ```
//!
//! Values given on the command line always win over the file, and the file
//! wins over the built-in defaults (`eng`, `text`).

use std::fs;
use std::path::{Path, PathBuf};

use paysplit_core::Jurisdiction;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::report::OutputFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults read from a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub country: Option<Jurisdiction>,
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Effective settings for one run after merging flags and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub jurisdiction: Jurisdiction,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(
        country: Option<Jurisdiction>,
        format: Option<OutputFormat>,
        config: &CliConfig,
    ) -> Self {
        Self {
            jurisdiction: country.or(config.country).unwrap_or_default(),
            format: format.or(config.format).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_toml_reads_both_keys() {
        let config = CliConfig::from_toml("country = \"sco\"\nformat = \"json\"\n").unwrap();

        assert_eq!(
            config,
            CliConfig {
                country: Some(Jurisdiction::Scotland),
                format: Some(OutputFormat::Json),
            }
        );
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        assert!(CliConfig::from_toml("year = 2025\n").is_err());
    }

    #[test]
    fn test_from_toml_rejects_unknown_country() {
        assert!(CliConfig::from_toml("country = \"fra\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = CliConfig::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_resolve_flag_beats_config() {
        let config = CliConfig {
            country: Some(Jurisdiction::Scotland),
            format: Some(OutputFormat::Json),
        };

        let settings = Settings::resolve(
            Some(Jurisdiction::Wales),
            Some(OutputFormat::Text),
            &config,
        );

        assert_eq!(settings.jurisdiction, Jurisdiction::Wales);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_resolve_config_beats_default() {
        let config = CliConfig {
            country: Some(Jurisdiction::NorthernIreland),
            format: None,
        };

        let settings = Settings::resolve(None, None, &config);

        assert_eq!(settings.jurisdiction, Jurisdiction::NorthernIreland);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_resolve_defaults_to_england_text() {
        let settings = Settings::resolve(None, None, &CliConfig::default());

        assert_eq!(
            settings,
            Settings {
                jurisdiction: Jurisdiction::England,
                format: OutputFormat::Text,
            }
        );
    }
}
