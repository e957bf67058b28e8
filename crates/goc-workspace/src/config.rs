// config.rs — Staging configuration.
//
// Loaded from `.goc/stage.toml` in the project root when present. Every
// field has a default, so a missing file and an empty file behave the same.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StageError};

/// Relative location of the config file inside a project.
pub const CONFIG_FILE: &str = ".goc/stage.toml";

/// Top-level staging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default)]
    pub staging: StagingConfig,

    #[serde(default)]
    pub go: GoConfig,

    /// Directory the config was found in; relative paths resolve against it.
    #[serde(skip)]
    pub project_root: Option<PathBuf>,
}

/// Where and how the project is mirrored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Base directory for temp workspaces. Defaults to the system temp dir.
    pub temp_dir: Option<PathBuf>,

    /// Names skipped while copying (`dir/`, `*.ext`, or exact name).
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Toolchain settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoConfig {
    /// Executable used to list packages.
    #[serde(default = "default_go_binary")]
    pub binary: PathBuf,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            binary: default_go_binary(),
        }
    }
}

fn default_go_binary() -> PathBuf {
    PathBuf::from("go")
}

impl StageConfig {
    /// Load `.goc/stage.toml` under `project_root`, or defaults if absent.
    pub fn for_project(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        let path = project_root.join(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::load(&path)?
        } else {
            Self::default()
        };
        config.project_root = Some(project_root.to_path_buf());
        Ok(config)
    }

    /// Find the config in `start` or its nearest ancestor holding one.
    /// Falls back to defaults rooted at `start`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        match start.ancestors().find(|dir| dir.join(CONFIG_FILE).is_file()) {
            Some(root) => Self::for_project(root),
            None => Self::for_project(start),
        }
    }

    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StageError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| StageError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Base directory under which the workspace is created. Always absolute:
    /// a relative `temp_dir` resolves against the project root.
    pub fn temp_base(&self) -> Result<PathBuf> {
        match &self.staging.temp_dir {
            None => Ok(std::env::temp_dir()),
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => match &self.project_root {
                Some(root) => Ok(root.join(dir)),
                None => Err(StageError::Config {
                    path: PathBuf::from(CONFIG_FILE),
                    message: format!(
                        "relative staging.temp_dir '{}' needs a project root",
                        dir.display()
                    ),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = StageConfig::for_project(dir.path()).unwrap();
        assert!(config.staging.temp_dir.is_none());
        assert!(config.staging.exclude.is_empty());
        assert_eq!(config.go.binary, PathBuf::from("go"));
        assert_eq!(config.temp_base().unwrap(), std::env::temp_dir());
    }

    #[test]
    fn parses_all_sections() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".goc")).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[staging]
temp_dir = "/var/tmp"
exclude = ["node_modules/", "*.log"]

[go]
binary = "/usr/local/go/bin/go"
"#,
        )
        .unwrap();

        let config = StageConfig::for_project(dir.path()).unwrap();
        assert_eq!(config.temp_base().unwrap(), PathBuf::from("/var/tmp"));
        assert_eq!(config.staging.exclude, vec!["node_modules/", "*.log"]);
        assert_eq!(config.go.binary, PathBuf::from("/usr/local/go/bin/go"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".goc")).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[staging\n").unwrap();

        let result = StageConfig::for_project(dir.path());
        assert!(matches!(result, Err(StageError::Config { .. })));
    }

    #[test]
    fn relative_temp_dir_resolves_against_project_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".goc")).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[staging]\ntemp_dir = \"tmp\"\n").unwrap();

        let config = StageConfig::for_project(dir.path()).unwrap();
        let base = config.temp_base().unwrap();
        assert!(base.is_absolute());
        assert_eq!(base, dir.path().join("tmp"));
    }

    #[test]
    fn relative_temp_dir_without_root_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stage.toml");
        std::fs::write(&path, "[staging]\ntemp_dir = \"tmp\"\n").unwrap();

        let config = StageConfig::load(&path).unwrap();
        assert!(matches!(config.temp_base(), Err(StageError::Config { .. })));
    }

    #[test]
    fn discover_finds_config_in_ancestor() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".goc")).unwrap();
        std::fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[staging]\nexclude = [\"*.log\"]\n").unwrap();

        let config = StageConfig::discover(dir.path().join("sub/deeper")).unwrap();
        assert_eq!(config.staging.exclude, vec!["*.log"]);
        assert_eq!(config.project_root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn discover_without_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = StageConfig::discover(dir.path()).unwrap();
        assert!(config.staging.exclude.is_empty());
        assert_eq!(config.project_root.as_deref(), Some(dir.path()));
    }
}
