//! Locating and reading the CLI's TOML configuration.
//!
//! An explicit `--config` path must exist. Otherwise the first existing
//! file among the [candidates](config_candidates) is used, and the built-in
//! defaults apply when there is none.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use dotviz::{DotvizError, config::AppConfig};

/// Relative path checked in the working directory.
const LOCAL_CONFIG: &str = "dotviz/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error in {path}: {message}")]
    Validation { path: PathBuf, message: String },
}

impl From<ConfigError> for DotvizError {
    fn from(err: ConfigError) -> Self {
        DotvizError::Config(err.to_string())
    }
}

/// Implicit configuration locations, most specific first.
fn config_candidates() -> Vec<(&'static str, PathBuf)> {
    let mut candidates = vec![("local", PathBuf::from(LOCAL_CONFIG))];
    match ProjectDirs::from("com", "dotviz", "dotviz") {
        Some(dirs) => candidates.push(("system", dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

/// Load the configuration for this run.
///
/// # Errors
///
/// Returns [`DotvizError::Config`] if an explicit path does not exist, or if
/// the selected file cannot be parsed or fails validation.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DotvizError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(), origin = "explicit"; "Loading configuration");
        return read_config(path);
    }

    for (origin, path) in config_candidates() {
        if path.exists() {
            info!(path = path.display().to_string(), origin; "Loading configuration");
            return read_config(&path);
        }
        debug!(path = path.display().to_string(), origin; "No configuration file here");
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}

fn read_config(path: &Path) -> Result<AppConfig, DotvizError> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    config
        .validate()
        .map_err(|message| ConfigError::Validation {
            path: path.to_path_buf(),
            message,
        })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nnode_radius = 12\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.style().node_radius(), 12.0);
        assert_eq!(config.canvas().width(), 600.0);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();

        assert!(matches!(&err, DotvizError::Config(msg) if msg.contains("Missing")));
    }

    #[test]
    fn test_directory_is_not_a_config_file() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(dir.path())).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(&err, DotvizError::Config(msg) if msg.contains("TOML")));
    }

    #[test]
    fn test_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nbackground_color = \"nope\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(&err, DotvizError::Config(msg) if msg.contains("Validation")));
    }

    #[test]
    fn test_candidates_start_with_local_path() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], ("local", PathBuf::from(LOCAL_CONFIG)));
    }
}
