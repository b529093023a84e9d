//! Workflow context
//!
//! This module defines the state collected while a batch is processed.

use std::path::PathBuf;

use crate::config::Settings;
use crate::file_ops::OperationMode;

/// What happened to a single input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was renamed in place
    Renamed,
    /// The file was copied into the output directory
    Copied,
    /// Dry run: the operation was only planned
    Planned(OperationMode),
    /// The file was skipped because of an error
    Failed(String),
}

/// Outcome for one input file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// The input path
    pub source: PathBuf,
    /// The path the file was (or would be) written to
    pub target: Option<PathBuf>,
    /// Whether the new name carries the error prefix
    pub flagged: bool,
    /// What happened to the file
    pub status: FileStatus,
}

impl FileOutcome {
    /// Creates an outcome for a file that could not be processed
    pub fn failed(source: PathBuf, target: Option<PathBuf>, flagged: bool, reason: String) -> Self {
        FileOutcome {
            source,
            target,
            flagged,
            status: FileStatus::Failed(reason),
        }
    }

    /// Whether the file was skipped because of an error
    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files processed
    pub files_processed: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of files copied
    pub files_copied: usize,
    /// Number of operations planned in a dry run
    pub files_planned: usize,
    /// Number of files whose name got the error prefix
    pub files_flagged: usize,
    /// Number of errors
    pub errors: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The settings used for the run
    pub settings: Settings,
    /// Whether the run only simulates file operations
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// One outcome per input file, in input order
    pub outcomes: Vec<FileOutcome>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(settings: Settings, dry_run: bool) -> Self {
        WorkflowContext {
            settings,
            dry_run,
            stats: WorkflowStats::default(),
            outcomes: Vec::new(),
        }
    }

    /// Records the outcome of one file and updates the statistics
    pub fn record(&mut self, outcome: FileOutcome) {
        self.stats.files_processed += 1;
        if outcome.flagged {
            self.stats.files_flagged += 1;
        }
        match outcome.status {
            FileStatus::Renamed => self.stats.files_renamed += 1,
            FileStatus::Copied => self.stats.files_copied += 1,
            FileStatus::Planned(_) => self.stats.files_planned += 1,
            FileStatus::Failed(_) => self.stats.errors += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Whether any file failed
    pub fn has_failures(&self) -> bool {
        self.stats.errors > 0
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        let stats = &self.stats;
        if self.dry_run {
            format!(
                "Processed {} files (dry run): {} planned, {} flagged, {} failed",
                stats.files_processed, stats.files_planned, stats.files_flagged, stats.errors
            )
        } else {
            format!(
                "Processed {} files: {} renamed, {} copied, {} flagged, {} failed",
                stats.files_processed,
                stats.files_renamed,
                stats.files_copied,
                stats.files_flagged,
                stats.errors
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: FileStatus, flagged: bool) -> FileOutcome {
        FileOutcome {
            source: PathBuf::from("in.txt"),
            target: Some(PathBuf::from("out.txt")),
            flagged,
            status,
        }
    }

    #[test]
    fn test_record_updates_stats() {
        let mut context = WorkflowContext::new(Settings::default(), false);
        context.record(outcome(FileStatus::Renamed, false));
        context.record(outcome(FileStatus::Copied, true));
        context.record(FileOutcome::failed(
            PathBuf::from("bad.txt"),
            None,
            false,
            "denied".to_string(),
        ));

        assert_eq!(
            context.stats,
            WorkflowStats {
                files_processed: 3,
                files_renamed: 1,
                files_copied: 1,
                files_planned: 0,
                files_flagged: 1,
                errors: 1,
            }
        );
        assert!(context.has_failures());
        assert!(context.outcomes[2].is_failure());
        assert_eq!(
            context.summary(),
            "Processed 3 files: 1 renamed, 1 copied, 1 flagged, 1 failed"
        );
    }

    #[test]
    fn test_dry_run_summary() {
        let mut context = WorkflowContext::new(Settings::default(), true);
        context.record(outcome(FileStatus::Planned(OperationMode::Copy), false));

        assert!(!context.has_failures());
        assert_eq!(
            context.summary(),
            "Processed 1 files (dry run): 1 planned, 0 flagged, 0 failed"
        );
    }
}
