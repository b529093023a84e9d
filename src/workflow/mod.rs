//! Workflow module
//!
//! This module drives a batch of files from the command line to renamed or
//! copied files.

mod context;
mod engine;

pub use context::{FileOutcome, FileStatus, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, process_files, run};
