//! File operations module
//!
//! This module contains components for renaming and copying files.

mod actions;

pub use actions::{
    FileActionResult, OperationMode, copy_into, ensure_directory, perform_file_action,
    rename_in_place,
};
