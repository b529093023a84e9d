//! Output name collision handling
//!
//! Keeps track of the names taken in a target directory and numbers new
//! names that would clash with them, `Report.pdf` becoming
//! `Report (1).pdf`, `Report (2).pdf` and so on.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{Result, file_operation_error};

/// Names already taken in one target directory during one run
///
/// Each name maps to the number of times it has been handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCollisionTable {
    counts: HashMap<String, usize>,
}

impl NameCollisionTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table in which each of `names` is already taken
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameCollisionTable {
            counts: names.into_iter().map(|name| (name.into(), 0)).collect(),
        }
    }

    /// Creates a table seeded with the current entries of `dir`
    ///
    /// A directory that does not exist yet has no entries.
    ///
    /// # Errors
    /// Returns an error if the directory exists but cannot be listed
    pub fn seed_from_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            return Ok(Self::new());
        }

        let mut table = Self::new();
        let entries =
            fs::read_dir(dir).map_err(|e| file_operation_error(e, dir.to_path_buf(), "list"))?;
        for entry in entries {
            let entry = entry.map_err(|e| file_operation_error(e, dir.to_path_buf(), "list"))?;
            table
                .counts
                .insert(entry.file_name().to_string_lossy().into_owned(), 0);
        }

        debug!(
            "Seeded collision table for {} with {} entries",
            dir.display(),
            table.len()
        );
        Ok(table)
    }

    /// Returns a name for `candidate` that is not taken yet and takes it
    pub fn resolve(&mut self, candidate: &str) -> String {
        let Some(mut count) = self.counts.get(candidate).copied() else {
            self.counts.insert(candidate.to_string(), 0);
            return candidate.to_string();
        };

        let name = loop {
            count += 1;
            let name = numbered_name(candidate, count);
            if !self.counts.contains_key(&name) {
                break name;
            }
        };

        self.counts.insert(candidate.to_string(), count);
        self.counts.insert(name.clone(), 0);
        debug!("Name '{candidate}' is taken, using '{name}'");
        name
    }

    /// Gives back `name`, the result of the last [`resolve`](Self::resolve) of `candidate`
    ///
    /// Used when nothing ended up being written under `name`, so the next
    /// file with the same candidate can have it.
    pub fn release(&mut self, candidate: &str, name: &str) {
        self.counts.remove(name);
        debug!("Released name '{name}'");
        if name == candidate {
            return;
        }
        if let Some(count) = self.counts.get_mut(candidate) {
            *count = count.saturating_sub(1);
        }
    }

    /// Whether `name` is taken
    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Number of names taken
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no names are taken
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Inserts ` (n)` in front of the extension of `name`
///
/// Names without an extension, including dot-files like `.bashrc`, get the
/// number appended at the end.
fn numbered_name(name: &str, count: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem} ({count}).{extension}"),
        _ => format!("{name} ({count})"),
    }
}
