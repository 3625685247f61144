//! Saved launch selections
//!
//! A selection file is a TOML document holding one complete answer to the
//! launch form. Missing keys fall back to the form defaults.

use crate::form::{Device, Launcher, MachineOs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Directory (next to the executable) holding saved selections
pub const CONFIG_DIR_NAME: &str = "Config";

/// File extension of selection files
pub const CONFIG_EXTENSION: &str = "toml";

/// One complete launch selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// OpenVINO toolkit is already installed
    pub openvino_installed: bool,

    /// Docker is already installed
    pub docker_installed: bool,

    /// Operating system of the host
    pub machine_os: MachineOs,

    /// Accelerators on the host, in selection order
    pub devices: Vec<Device>,

    /// Launch method
    pub start_with: Launcher,

    pub http_proxy: bool,
    pub https_proxy: bool,
    pub no_proxy: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            openvino_installed: true,
            docker_installed: true,
            machine_os: MachineOs::Linux,
            devices: vec![Device::Cpu],
            start_with: Launcher::Pip,
            http_proxy: false,
            https_proxy: false,
            no_proxy: false,
        }
    }
}

impl LaunchConfig {
    /// Load a selection from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: LaunchConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), ?config, "Loaded selection file");
        Ok(config)
    }

    /// Save the selection to a TOML file, creating parent directories
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = self.to_toml()?;
        fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(path = %path.display(), "Saved selection file");
        Ok(())
    }

    /// Render the selection as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize { source: e })
    }

    /// Generate a sample selection file
    pub fn sample_config() -> String {
        r#"# DL Workbench launch selection
# This file uses TOML format (https://toml.io)

# Prerequisites already present on the machine
openvino_installed = true
docker_installed = true

# Operating system: "Linux", "Windows" or "Ubuntu"
machine_os = "Linux"

# Accelerators on the machine, any of "CPU", "GPU", "NCS2", "HDDL"
# At least one is required
devices = ["CPU"]

# Launch method: "pip" (Python wrapper) or "docker" (plain docker command)
start_with = "pip"

# Proxy usage
http_proxy = false
https_proxy = false
no_proxy = false
"#
        .to_string()
    }
}

/// Check a selection name before it becomes a file name
pub fn validate_config_name(name: &str) -> Result<(), ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains('.') {
        return Err(ConfigError::InvalidName(trimmed.to_string()));
    }
    Ok(())
}

/// Directory of the running executable
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default directory of saved selections
pub fn default_config_dir() -> PathBuf {
    executable_dir().join(CONFIG_DIR_NAME)
}

/// Path of the selection called `name` inside `config_dir`
pub fn config_path(config_dir: &Path, name: &str) -> PathBuf {
    config_dir.join(name.trim()).with_extension(CONFIG_EXTENSION)
}

/// Selection files in `config_dir`, sorted by name
pub fn list_saved_configs(config_dir: &Path) -> Vec<PathBuf> {
    let mut configs: Vec<PathBuf> = fs::read_dir(config_dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.extension()
                        .map(|ext| ext == std::ffi::OsStr::new(CONFIG_EXTENSION))
                        .unwrap_or(false)
                })
                .collect()
        })
        .unwrap_or_default();
    configs.sort();
    configs
}

/// Errors that can occur when loading or saving selections
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read selection file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse selection file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write selection file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize selection: {source}")]
    Serialize { source: toml::ser::Error },

    #[error("Selection name is empty")]
    EmptyName,

    #[error("Selection name '{0}' must not contain '/', '\\' or '.'")]
    InvalidName(String),
}
