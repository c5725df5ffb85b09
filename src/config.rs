//! Configuration file support
//!
//! Read only from a path passed with `--config`; without one the defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::DEFAULT_PROJECTS_DIR;
use crate::ContentWriter;

/// Project id used when neither the command line nor the config names one
pub const DEFAULT_PROJECT: &str = "default";

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding all projects
    /// Default: "projects"
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,

    /// Project id to write to when `--project` is not given
    /// Default: "default"
    #[serde(default = "default_project")]
    pub default_project: String,
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECTS_DIR)
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            default_project: default_project(),
        }
    }
}

/// Error loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load config from an explicit TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick the project id: explicit choice first, then the configured default
    pub fn resolve_project(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .unwrap_or_else(|| self.default_project.clone())
    }

    pub fn writer(&self) -> ContentWriter {
        ContentWriter::new(&self.projects_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.projects_dir, Path::new("projects"));
        assert_eq!(config.resolve_project(None), "default");
        assert_eq!(config.resolve_project(Some("demo")), "demo");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
projects_dir = "/srv/aimv/projects"
default_project = "launch-video"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.projects_dir, Path::new("/srv/aimv/projects"));
        assert_eq!(config.resolve_project(None), "launch-video");
        assert_eq!(config.writer().projects_dir(), Path::new("/srv/aimv/projects"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("default_project = \"demo\"").unwrap();
        assert_eq!(config.projects_dir, Path::new("projects"));
        assert_eq!(config.default_project, "demo");
    }

    #[test]
    fn test_load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = Config::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "projects_dir = [").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }
}
