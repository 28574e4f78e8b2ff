//! Configuration file handling
//!
//! The configuration file is a small YAML mapping at `~/.sbitrc` providing
//! defaults for the library and suite paths. Command line flags always take
//! precedence over file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths;
use super::{Error, Result};

/// Per-user configuration loaded from `~/.sbitrc`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing the test scripts
    #[serde(default)]
    pub test_library_path: Option<String>,

    /// Path to the suite description file
    #[serde(default)]
    pub test_suite_path: Option<String>,
}

impl Config {
    /// Load configuration from the given file, or from `~/.sbitrc` when none
    /// is given
    ///
    /// Returns the default (empty) configuration if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match paths::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::file_read(&path, &e))?;
        serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Library root from the configuration, with `~/` expanded
    pub fn library_path(&self) -> Option<PathBuf> {
        self.test_library_path.as_deref().map(paths::expand_user)
    }

    /// Suite file path from the configuration, with `~/` expanded
    pub fn suite_path(&self) -> Option<PathBuf> {
        self.test_suite_path.as_deref().map(paths::expand_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.yml"))).unwrap();
        assert!(config.test_library_path.is_none());
        assert!(config.test_suite_path.is_none());
    }

    #[test]
    fn test_load_paths_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "test_library_path: /usr/share/sbit/library").unwrap();
        writeln!(file, "test_suite_path: /etc/sbit/suite.yml").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(
            config.library_path(),
            Some(PathBuf::from("/usr/share/sbit/library"))
        );
        assert_eq!(config.suite_path(), Some(PathBuf::from("/etc/sbit/suite.yml")));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "librarypath: /tmp").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }
}
