//! Workflow engine
//!
//! This module contains the engine that drives a batch of files through
//! transformation, collision resolution and the file operation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::collision::NameCollisionTable;
use crate::config::{self, Settings};
use crate::errors::{Error, Result, invalid_filename_error, path_operation_error};
use crate::file_ops::{FileActionResult, OperationMode, ensure_directory, perform_file_action};
use crate::transform::transform_name;

use super::context::{FileOutcome, FileStatus, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to just simulate the file operations
    pub dry_run: bool,
}

/// Loads the settings and processes the given files
///
/// # Errors
/// * Configuration errors from [`config::load`]
/// * Everything [`process_files`] fails with
pub fn run(files: &[PathBuf], options: &ProcessingOptions) -> Result<WorkflowContext> {
    let settings = config::load(&options.config_path)?;
    process_files(files, &settings, options.dry_run)
}

/// Renames or copies each file according to the settings
///
/// Files are handled one at a time in the given order. A file that cannot be
/// renamed or copied is reported and skipped; the rest of the batch still runs.
///
/// # Arguments
/// * `files` - The files to process
/// * `settings` - Marker, mode and output directory
/// * `dry_run` - Only report what would happen
///
/// # Returns
/// * `Result<WorkflowContext>` - One outcome per file plus statistics
///
/// # Errors
/// * [`Error::NoInput`] if `files` is empty
/// * [`Error::IllegalOutputDirName`] if the output directory name is invalid
/// * [`Error::DirectoryCreate`] if the output directory cannot be created
pub fn process_files(
    files: &[PathBuf],
    settings: &Settings,
    dry_run: bool,
) -> Result<WorkflowContext> {
    let first = files.first().ok_or(Error::NoInput)?;
    let output_dir_name = settings.output_dir_name()?;
    let mode = OperationMode::from_make_copy(settings.make_copy);

    let copy_dir = match mode {
        OperationMode::Copy => {
            let directory = containing_directory(first).join(&output_dir_name);
            if !dry_run {
                ensure_directory(&directory)?;
            }
            Some(directory)
        }
        OperationMode::Rename => None,
    };

    info!(
        "Processing {} files{}...",
        files.len(),
        if dry_run { " (dry run)" } else { "" }
    );

    let mut context = WorkflowContext::new(settings.clone(), dry_run);
    let mut tables: HashMap<PathBuf, NameCollisionTable> = HashMap::new();

    for file in files {
        debug!("Processing file: {}", file.display());
        let target_dir = match &copy_dir {
            Some(directory) => directory.clone(),
            None => containing_directory(file),
        };

        let outcome = process_file(file, &target_dir, &mut tables, settings, mode, dry_run);
        if let FileStatus::Failed(reason) = &outcome.status {
            error!("Failed: {}: {reason}", file.display());
        }
        context.record(outcome);
    }

    info!("{}", context.summary());
    Ok(context)
}

/// Handles a single file, turning every error into a failed outcome
fn process_file(
    file: &Path,
    target_dir: &Path,
    tables: &mut HashMap<PathBuf, NameCollisionTable>,
    settings: &Settings,
    mode: OperationMode,
    dry_run: bool,
) -> FileOutcome {
    let file_name = match file_name_of(file) {
        Ok(name) => name,
        Err(e) => return FileOutcome::failed(file.to_path_buf(), None, false, e.to_string()),
    };

    let transformed = transform_name(file_name, &settings.marker);
    let flagged = transformed.flagged;

    let table = match collision_table(tables, target_dir) {
        Ok(table) => table,
        Err(e) => return FileOutcome::failed(file.to_path_buf(), None, flagged, e.to_string()),
    };
    let new_name = table.resolve(&transformed.name);
    let target = target_dir.join(&new_name);

    match perform_file_action(file, &target, mode, !dry_run) {
        Ok(result) => {
            report(file_name, &new_name, &result);
            let status = match (result.executed, result.mode) {
                (false, mode) => FileStatus::Planned(mode),
                (true, OperationMode::Rename) => FileStatus::Renamed,
                (true, OperationMode::Copy) => FileStatus::Copied,
            };
            FileOutcome {
                source: file.to_path_buf(),
                target: Some(target),
                flagged,
                status,
            }
        }
        Err(e) => {
            table.release(&transformed.name, &new_name);
            FileOutcome::failed(file.to_path_buf(), Some(target), flagged, e.to_string())
        }
    }
}

/// Returns the collision table for `directory`, seeding it on first use
///
/// Tables are shared by every spelling of the same directory.
fn collision_table<'a>(
    tables: &'a mut HashMap<PathBuf, NameCollisionTable>,
    directory: &Path,
) -> Result<&'a mut NameCollisionTable> {
    let key = directory_key(directory);
    if !tables.contains_key(&key) {
        let table = NameCollisionTable::seed_from_dir(directory)?;
        tables.insert(key.clone(), table);
    }
    tables
        .get_mut(&key)
        .ok_or_else(|| path_operation_error(directory.to_path_buf(), "look up names in"))
}

/// Canonical form of `directory`, or the path as given if it cannot be resolved
fn directory_key(directory: &Path) -> PathBuf {
    fs::canonicalize(directory).unwrap_or_else(|_| directory.to_path_buf())
}

fn report(file_name: &str, new_name: &str, result: &FileActionResult) {
    let action = match (result.executed, result.mode) {
        (true, OperationMode::Rename) => "Renamed",
        (true, OperationMode::Copy) => "Copied and renamed",
        (false, OperationMode::Rename) => "Would rename",
        (false, OperationMode::Copy) => "Would copy and rename",
    };
    info!("{action}: {file_name} -> {new_name}");
}

fn file_name_of(file: &Path) -> Result<&str> {
    file.file_name()
        .ok_or_else(|| path_operation_error(file.to_path_buf(), "get filename"))?
        .to_str()
        .ok_or_else(|| invalid_filename_error(file.to_path_buf()))
}

/// The directory a file lives in, `.` for bare filenames
fn containing_directory(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
