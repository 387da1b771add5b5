//! Configuration file discovery and loading.
//!
//! This module handles locating and parsing the user configuration file,
//! by default `~/.wincanon/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Loads configuration from disk.
///
/// # Examples
///
/// ```no_run
/// use wincanon::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("wincanon.yaml")).unwrap();
/// println!("configured family: {:?}", config.family);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for the [`Config`] schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The default user configuration path, if a home directory exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::config::ConfigLoader;
    ///
    /// if let Some(path) = ConfigLoader::user_config_path() {
    ///     assert!(path.ends_with(".wincanon/config.yaml"));
    /// }
    /// ```
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".wincanon").join("config.yaml"))
    }

    /// Load the user configuration file if one exists.
    ///
    /// A missing file is not an error and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        let Some(path) = Self::user_config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::PathFamily;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_file_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "family: mingw64").unwrap();
        writeln!(file, "strict_escapes: true").unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.family, Some(PathFamily::MinGw64));
        assert_eq!(config.strict_escapes, Some(true));
    }

    #[test]
    fn test_load_file_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "family: [not, a, family]").unwrap();

        let result = ConfigLoader::load_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_file_missing() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/wincanon.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_file_empty_mounts() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mounts:").unwrap();
        writeln!(file, "  cygwin: mnt").unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        let mounts = config.mounts.unwrap();
        assert_eq!(mounts.get(&PathFamily::Cygwin), Some(&"mnt".to_string()));
    }
}
