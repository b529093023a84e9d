//! Filename transformation
//!
//! Cuts a filename down to the part starting at the marker, turns the dashes
//! of the date segment into dots and glues the next segment onto it.
//!
//! `SO 2020-01-15 - Report.pdf` becomes `SO 2020.01.15_Report.pdf`.

use log::{trace, warn};

use crate::constants::{ERROR_PREFIX, SEGMENT_MERGER, SEGMENT_SEPARATOR};
use crate::errors::{Result, marker_not_found_error, missing_segment_error};

/// Transforms a filename, returning an error when it cannot be transformed
///
/// The output keeps the marker itself: everything before the first
/// occurrence of `marker` is dropped, the marker and everything after it
/// survive.
///
/// # Errors
/// * [`crate::Error::MarkerNotFound`] if `marker` does not occur in `file_name`
/// * [`crate::Error::MissingSegment`] if there is no `" - "` after the marker
pub fn try_transform(file_name: &str, marker: &str) -> Result<String> {
    let marker_index = file_name
        .find(marker)
        .ok_or_else(|| marker_not_found_error(file_name, marker))?;
    let relevant = &file_name[marker_index..];
    trace!("Relevant part of '{file_name}': '{relevant}'");

    let mut segments = relevant.split(SEGMENT_SEPARATOR);
    // split always yields at least one item
    let date = segments.next().unwrap_or_default();
    let title = segments
        .next()
        .ok_or_else(|| missing_segment_error(file_name))?;

    let mut merged = date.replace('-', ".");
    merged.push_str(SEGMENT_MERGER);
    merged.push_str(title);

    Ok(std::iter::once(merged.as_str())
        .chain(segments)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR))
}

/// A transformed filename and whether it had to be error-marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedName {
    pub name: String,
    pub flagged: bool,
}

/// Transforms a filename, falling back to the error-marked name
///
/// The reason a name could not be transformed is logged as a warning.
pub fn transform_name(file_name: &str, marker: &str) -> TransformedName {
    match try_transform(file_name, marker) {
        Ok(name) => TransformedName {
            name,
            flagged: false,
        },
        Err(e) => {
            warn!("{e}");
            TransformedName {
                name: error_marked(file_name),
                flagged: true,
            }
        }
    }
}

/// Transforms a filename, tagging it with the error prefix on failure
///
/// Never fails: names that cannot be transformed come back as
/// `_ERR_<file_name>` so the batch can carry on.
pub fn transform(file_name: &str, marker: &str) -> String {
    transform_name(file_name, marker).name
}

/// Prefixes a filename with the error marker
pub fn error_marked(file_name: &str) -> String {
    format!("{ERROR_PREFIX}{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_name_flags_only_fallbacks() {
        let renamed = transform_name("SO 2020-01-15 - Report.pdf", "SO ");
        assert_eq!(renamed.name, "SO 2020.01.15_Report.pdf");
        assert!(!renamed.flagged);

        let marked = transform_name("SO 2020-01-15.pdf", "SO ");
        assert_eq!(marked.name, "_ERR_SO 2020-01-15.pdf");
        assert!(marked.flagged);

        // Already carrying the prefix is not the same as being flagged
        let prefixed = transform_name("_ERR_SO 2020-01-15 - a.txt", "SO ");
        assert_eq!(prefixed.name, "SO 2020.01.15_a.txt");
        assert!(!prefixed.flagged);
    }

    #[test]
    fn test_transform_basic() {
        assert_eq!(
            transform("SO 2020-01-15 - Report.pdf", "SO "),
            "SO 2020.01.15_Report.pdf"
        );
    }

    #[test]
    fn test_transform_drops_prefix_and_keeps_marker() {
        assert_eq!(
            transform("[forum] SO 2021-12-03 - Minutes.docx", "SO "),
            "SO 2021.12.03_Minutes.docx"
        );
    }

    #[test]
    fn test_transform_keeps_later_segments() {
        assert_eq!(
            transform("SO 2020-01-15 - Report - Final - v2.pdf", "SO "),
            "SO 2020.01.15_Report - Final - v2.pdf"
        );
    }

    #[test]
    fn test_transform_only_reformats_first_segment() {
        // dashes after the first separator are left alone
        assert_eq!(
            transform("SO 2020-01-15 - Q1-Q2 report.pdf", "SO "),
            "SO 2020.01.15_Q1-Q2 report.pdf"
        );
    }

    #[test]
    fn test_transform_uses_first_marker_occurrence() {
        assert_eq!(
            transform("SO 1999-01-01 - SO 2000-02-02 - x.txt", "SO "),
            "SO 1999.01.01_SO 2000-02-02 - x.txt"
        );
    }

    #[test]
    fn test_transform_marker_not_found() {
        assert_eq!(transform("random.txt", "SO "), "_ERR_random.txt");
        assert_eq!(transform("", "SO "), "_ERR_");
    }

    #[test]
    fn test_transform_marker_is_case_sensitive() {
        assert_eq!(
            transform("so 2020-01-15 - Report.pdf", "SO "),
            "_ERR_so 2020-01-15 - Report.pdf"
        );
    }

    #[test]
    fn test_transform_missing_segment_is_error_marked() {
        assert_eq!(
            transform("SO 2020-01-15.pdf", "SO "),
            "_ERR_SO 2020-01-15.pdf"
        );
        // a dash without surrounding spaces is not a separator
        assert_eq!(
            transform("SO 2020-01-15-Report.pdf", "SO "),
            "_ERR_SO 2020-01-15-Report.pdf"
        );
    }

    #[test]
    fn test_try_transform_errors() {
        let err = try_transform("random.txt", "SO ").unwrap_err();
        assert!(matches!(err, crate::Error::MarkerNotFound { .. }));

        let err = try_transform("SO 2020-01-15.pdf", "SO ").unwrap_err();
        assert!(matches!(err, crate::Error::MissingSegment { .. }));
    }

    #[test]
    fn test_transform_is_idempotent_for_unmatched_names() {
        let first = transform("holiday.jpg", "SO ");
        let second = transform("holiday.jpg", "SO ");
        assert_eq!(first, second);
        assert_eq!(first, "_ERR_holiday.jpg");
    }

    #[test]
    fn test_transform_empty_marker_matches_from_start() {
        assert_eq!(transform("2020-01-15 - Report.pdf", ""), "2020.01.15_Report.pdf");
    }

    #[test]
    fn test_transform_marker_with_dash() {
        // the marker is part of the first segment, so its dashes become dots too
        assert_eq!(
            transform("x-SO-2020-01-15 - a.txt", "SO-"),
            "SO.2020.01.15_a.txt"
        );
    }

    #[test]
    fn test_transform_empty_title_segment() {
        assert_eq!(transform("SO 2020-01-15 - ", "SO "), "SO 2020.01.15_");
    }
}
