//! Loading and validation of [`CoreConfig`] from TOML sources.

use std::path::{Path, PathBuf};

use crate::config::types::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils;

/// Loads and validates the core configuration.
///
/// The loader is stateless; all methods are associated functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the given TOML file.
    ///
    /// A missing file is reported as [`ConfigError::ReadError`]; callers
    /// that treat a missing file as "use defaults" should check for the
    /// file themselves and fall back to [`CoreConfig::default`].
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = utils::fs::read_to_string(path).map_err(|e| match e {
            CoreError::Io(source) => CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            }),
            other => other,
        })?;
        Self::load_from_str(&content)
    }

    /// Loads the configuration from the first existing file among
    /// `locations`.
    ///
    /// Returns [`ConfigError::NotFound`] listing the searched locations
    /// when none of them exists. A file that exists but fails to read,
    /// parse, or validate is reported as such; later locations are not
    /// tried as fallbacks.
    pub fn load_from_locations(locations: &[PathBuf]) -> Result<CoreConfig, CoreError> {
        for path in locations {
            if path.is_file() {
                return Self::load_from_path(path);
            }
        }
        Err(ConfigError::NotFound {
            locations: locations.to_vec(),
        }
        .into())
    }

    /// Parses and validates configuration from a TOML string.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig =
            toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_from_str_full() {
        let config = ConfigLoader::load_from_str(
            r#"
            [logging]
            level = "Debug"
            format = "json"
            file_path = "/var/log/farebell/core.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.logging.file_path.is_some());
    }

    #[test]
    fn load_from_str_empty_uses_defaults() {
        let config = ConfigLoader::load_from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn load_from_str_invalid_toml() {
        let result = ConfigLoader::load_from_str("logging = nonsense");
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn load_from_str_invalid_value() {
        let result = ConfigLoader::load_from_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn load_from_path_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn load_from_locations_picks_first_existing() {
        let temp = tempfile::tempdir().unwrap();
        let present = temp.path().join("config.toml");
        std::fs::write(&present, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = ConfigLoader::load_from_locations(&[
            temp.path().join("missing.toml"),
            present,
            temp.path().join("never-reached.toml"),
        ])
        .unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn load_from_locations_reports_searched_paths() {
        let locations = vec![
            PathBuf::from("/nonexistent/one.toml"),
            PathBuf::from("/nonexistent/two.toml"),
        ];
        match ConfigLoader::load_from_locations(&locations) {
            Err(CoreError::Config(ConfigError::NotFound { locations: searched })) => {
                assert_eq!(searched, locations);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_from_path_missing_file() {
        let result =
            ConfigLoader::load_from_path(Path::new("/nonexistent/farebell/config.toml"));
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ReadError { .. }))
        ));
    }
}
