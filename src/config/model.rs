//! Configuration data structures
//!
//! This module contains the settings persisted in `renconfig.json`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAKE_COPY, DEFAULT_MARKER, DEFAULT_OUTPUT_DIR, ILLEGAL_DIR_CHARS,
};
use crate::errors::{Result, illegal_output_dir_error};

/// Settings for a renaming run
///
/// Every field falls back to its own default when it is missing from the
/// configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Text that marks where the meaningful part of a filename starts
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Copy files into the output directory (true) or rename them in place (false)
    #[serde(default = "default_make_copy")]
    pub make_copy: bool,
    /// Name of the directory copies are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            marker: default_marker(),
            make_copy: default_make_copy(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    /// Returns the name of the output directory to use
    ///
    /// Spaces are replaced with underscores and an empty name falls back to
    /// the default.
    ///
    /// # Errors
    /// Returns [`crate::Error::IllegalOutputDirName`] if the name contains a
    /// character that is not allowed in a directory name
    pub fn output_dir_name(&self) -> Result<String> {
        let name = self.output_dir.replace(' ', "_");

        if name.is_empty() {
            return Ok(DEFAULT_OUTPUT_DIR.to_string());
        }

        if name.contains(ILLEGAL_DIR_CHARS) {
            return Err(illegal_output_dir_error(&name));
        }

        Ok(name)
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_make_copy() -> bool {
    DEFAULT_MAKE_COPY
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}
