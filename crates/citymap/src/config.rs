//! Configuration file handling.
//!
//! A config file selects the graph representation, the directedness of new
//! networks, and an optional snapshot to load at startup:
//!
//! ```yaml
//! representation: list
//! directed: false
//! network-file: data/network.json
//! ```
//!
//! Every key is optional; missing keys take their default.

use crate::error::{Error, Result};
use citygraph::domain::Representation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the configuration file
pub const CONFIG_FILE_NAME: &str = "citymap.yaml";

/// Configuration file structure for citymap
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct CitymapConfig {
    /// Backing representation for the network
    pub representation: Representation,

    /// Whether routes are one-way
    pub directed: bool,

    /// Snapshot to load instead of the built-in network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_file: Option<PathBuf>,
}

impl CitymapConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if given, otherwise fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = CitymapConfig::default();
        assert_eq!(config.representation, Representation::Matrix);
        assert!(!config.directed);
        assert!(config.network_file.is_none());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let original = CitymapConfig {
            representation: Representation::List,
            directed: true,
            network_file: Some(PathBuf::from("network.json")),
        };
        original.save(&config_path).unwrap();

        let loaded = CitymapConfig::load(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_config_yaml_format() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        CitymapConfig::default().save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("representation: matrix"));
        assert!(content.contains("directed: false"));
        assert!(!content.contains("network-file"));
    }

    #[rstest]
    #[case::empty_file("{}", Representation::Matrix, false)]
    #[case::list_only("representation: list", Representation::List, false)]
    #[case::directed_only("directed: true", Representation::Matrix, true)]
    fn test_missing_keys_take_defaults(
        #[case] yaml: &str,
        #[case] representation: Representation,
        #[case] directed: bool,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, yaml).unwrap();

        let config = CitymapConfig::load(&config_path).unwrap();
        assert_eq!(config.representation, representation);
        assert_eq!(config.directed, directed);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "representation: hexagonal").unwrap();

        let err = CitymapConfig::load(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = CitymapConfig::load(&temp_dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            CitymapConfig::load_or_default(None).unwrap(),
            CitymapConfig::default()
        );
    }
}
