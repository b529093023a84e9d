//! Renames or copies batches of files by cutting each name down to a marker
//! and reformatting the date segment that follows it.

pub mod cli;
pub mod collision;
pub mod config;
pub mod constants;
mod errors;
pub mod file_ops;
pub mod logging;
pub mod transform;
pub mod workflow;

pub use errors::*;

pub mod prelude {
    pub use crate::collision::NameCollisionTable;
    pub use crate::config::Settings;
    pub use crate::errors::{
        config_read_error, config_write_error, directory_create_error, file_operation_error,
        illegal_output_dir_error, invalid_filename_error, marker_not_found_error,
        missing_segment_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, init_default_logger, init_logger};
    pub use crate::transform::{TransformedName, transform, transform_name, try_transform};
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, process_files, run};
}
