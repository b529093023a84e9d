//! File operation functionality
//!
//! This module contains functions for renaming and copying files and for
//! creating the output directory.

use std::fs::{create_dir_all, remove_file, rename};
use std::path::Path;

use fs_extra::file::{CopyOptions, copy};
use log::{debug, warn};

use crate::errors::{Result, directory_create_error, file_operation_error};

/// How a file reaches its new name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Rename the file where it is
    Rename,
    /// Copy the file into the output directory, leaving the original alone
    Copy,
}

impl OperationMode {
    /// Picks the mode from the `makeCopy` setting
    pub fn from_make_copy(make_copy: bool) -> Self {
        if make_copy {
            OperationMode::Copy
        } else {
            OperationMode::Rename
        }
    }
}

/// Result of performing a file action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileActionResult {
    /// The operation that was (or would have been) performed
    pub mode: OperationMode,
    /// Whether the filesystem was actually touched
    pub executed: bool,
}

/// Renames `source` to `target`
///
/// # Errors
/// Returns an error if the rename fails, e.g. because of permissions
pub fn rename_in_place(source: &Path, target: &Path) -> Result<()> {
    rename(source, target).map_err(|e| file_operation_error(e, source.to_path_buf(), "rename"))
}

/// Copies the contents of `source` to `target`, truncating `target` if it exists
///
/// The directory of `target` has to exist already. When the copy fails, a
/// `target` that did not exist before is removed again.
///
/// # Errors
/// Returns an error if `source` cannot be read or `target` cannot be written
pub fn copy_into(source: &Path, target: &Path) -> Result<()> {
    let existed = target.exists();
    let options = CopyOptions::new().overwrite(true);
    copy(source, target, &options).map_err(|e| {
        discard_partial_copy(target, existed);
        file_operation_error(std::io::Error::other(e), source.to_path_buf(), "copy")
    })?;
    Ok(())
}

fn discard_partial_copy(target: &Path, existed: bool) {
    if existed || !target.exists() {
        return;
    }
    match remove_file(target) {
        Ok(()) => debug!("Removed partial copy {}", target.display()),
        Err(e) => warn!("Could not remove partial copy {}: {e}", target.display()),
    }
}

/// Creates `directory` and its parents unless it exists already
///
/// # Errors
/// Returns [`crate::Error::DirectoryCreate`] if the directory cannot be created
pub fn ensure_directory(directory: &Path) -> Result<()> {
    create_dir_all(directory).map_err(|e| directory_create_error(e, directory.to_path_buf()))
}

/// Performs a file action (rename or copy)
///
/// # Arguments
/// * `source_path` - The file to rename or copy
/// * `target_path` - The new path of the file
/// * `mode` - Whether to rename or copy
/// * `run_execution` - Whether to actually perform the file operations (true) or just simulate them (false)
///
/// # Returns
/// * `Result<FileActionResult>` - The result of the file action or an error
///
/// # Errors
/// * Returns an error if the file action fails
pub fn perform_file_action(
    source_path: &Path,
    target_path: &Path,
    mode: OperationMode,
    run_execution: bool,
) -> Result<FileActionResult> {
    if run_execution {
        match mode {
            OperationMode::Rename => {
                debug!(
                    "Renaming file: {} -> {}",
                    source_path.display(),
                    target_path.display()
                );
                rename_in_place(source_path, target_path)?;
            }
            OperationMode::Copy => {
                debug!(
                    "Copying file: {} -> {}",
                    source_path.display(),
                    target_path.display()
                );
                copy_into(source_path, target_path)?;
            }
        }
    } else {
        debug!(
            "Simulating file action: {} -> {}",
            source_path.display(),
            target_path.display()
        );
    }

    Ok(FileActionResult {
        mode,
        executed: run_execution,
    })
}
