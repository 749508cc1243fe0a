//! Engine location settings.
//!
//! Lowest to highest precedence: built-in defaults, an optional YAML file,
//! then the `TP_*` environment variables.

use crate::platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tp_core::{PropsError, PropsResult};

pub const ENV_LIBRARY: &str = "TP_COOLPROP_LIBRARY";
pub const ENV_HOST_DIR: &str = "TP_HOST_DIR";
pub const ENV_MODULE_DIR: &str = "TP_MODULE_DIR";

/// Where to look for the native CoolProp library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Library filename override; the platform default when absent.
    pub library_file: Option<String>,
    /// Hosting application's install or plugin directory.
    pub host_dir: Option<PathBuf>,
    /// Directory of the module embedding this crate.
    pub module_dir: Option<PathBuf>,
}

impl EngineConfig {
    pub fn from_yaml_str(content: &str) -> PropsResult<Self> {
        serde_yaml::from_str(content).map_err(|e| PropsError::Config {
            message: e.to_string(),
        })
    }

    pub fn from_yaml_file(path: &Path) -> PropsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PropsError::Config {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply `TP_*` overrides read through `lookup`. Blank values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(file) = get(ENV_LIBRARY) {
            self.library_file = Some(file);
        }
        if let Some(dir) = get(ENV_HOST_DIR) {
            self.host_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = get(ENV_MODULE_DIR) {
            self.module_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Defaults plus process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Library filename to search for.
    pub fn library_file(&self) -> &str {
        self.library_file
            .as_deref()
            .unwrap_or(platform::LIBRARY_FILE)
    }

    /// Host directory, defaulting to the running executable's directory.
    pub fn host_dir(&self) -> Option<PathBuf> {
        self.host_dir.clone().or_else(executable_dir)
    }

    /// Module directory, defaulting to the running executable's directory.
    pub fn module_dir(&self) -> Option<PathBuf> {
        self.module_dir.clone().or_else(executable_dir)
    }
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
