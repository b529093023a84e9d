//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and saving the
//! settings file.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::{
    Result, config_read_error, config_write_error, path_operation_error,
};

use super::model::Settings;

/// Returns the path of the configuration file next to the running executable
///
/// # Errors
/// Returns an error if the executable path cannot be determined
pub fn config_path_beside_executable() -> Result<PathBuf> {
    let executable = env::current_exe().map_err(|e| {
        config_read_error(e, PathBuf::from(CONFIG_FILE_NAME), "cannot locate the executable")
    })?;
    let directory = executable
        .parent()
        .ok_or_else(|| path_operation_error(executable.clone(), "get parent directory"))?;

    Ok(directory.join(CONFIG_FILE_NAME))
}

/// Loads the settings from a file, creating it with defaults if it is missing
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings, or the defaults on first run
///
/// # Errors
/// * [`crate::Error::ConfigRead`] if the file exists but cannot be read or parsed
/// * [`crate::Error::ConfigWrite`] if the default file cannot be written
pub fn load(path: &Path) -> Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(
                "Configuration file {} not found, creating it with default settings",
                path.display()
            );
            let settings = Settings::default();
            save(&settings, path)?;
            return Ok(settings);
        }
        Err(e) => {
            let detail = e.to_string();
            return Err(config_read_error(e, path.to_path_buf(), &detail));
        }
    };

    let settings: Settings = serde_json::from_str(&content).map_err(|e| {
        let detail = format!("{e}. Please check the JSON syntax.");
        config_read_error(e, path.to_path_buf(), &detail)
    })?;

    debug!("Loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}

/// Saves the settings as indented JSON, overwriting the file
///
/// # Errors
/// Returns [`crate::Error::ConfigWrite`] if the settings cannot be serialised or written
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| config_write_error(e, path.to_path_buf()))?;

    fs::write(path, json).map_err(|e| config_write_error(e, path.to_path_buf()))?;
    debug!("Configuration saved to {}", path.display());

    Ok(())
}
