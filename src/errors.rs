use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::ILLEGAL_DIR_CHARS;

/// Custom error type for the renaming application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The configuration file exists but cannot be read or parsed
    ConfigRead {
        source: Box<dyn StdError + Send + Sync>,
        path: PathBuf,
        detail: String,
    },
    /// The configuration file cannot be written
    ConfigWrite {
        source: Box<dyn StdError + Send + Sync>,
        path: PathBuf,
    },
    /// No file paths were given on the command line
    NoInput,
    /// The output directory name contains characters that are not allowed
    IllegalOutputDirName { name: String },
    /// The copy-mode output directory cannot be created
    DirectoryCreate { source: io::Error, path: PathBuf },
    /// The marker does not occur in the filename
    MarkerNotFound { file_name: String, marker: String },
    /// The filename has no segment after the date
    MissingSegment { file_name: String },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Failed to {} file: {} ({})",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::ConfigRead { path, detail, .. } => {
                write!(
                    f,
                    "Failed to read configuration file {}: {detail}",
                    path.display()
                )
            }
            Error::ConfigWrite { path, source } => {
                write!(
                    f,
                    "Failed to write configuration file {}: {source}",
                    path.display()
                )
            }
            Error::NoInput => write!(f, "No files to process."),
            Error::IllegalOutputDirName { name } => {
                let illegal: String = ILLEGAL_DIR_CHARS.iter().collect();
                write!(
                    f,
                    "Output directory name '{name}' contains illegal characters (any of {illegal})"
                )
            }
            Error::DirectoryCreate { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {source}",
                    path.display()
                )
            }
            Error::MarkerNotFound { file_name, marker } => {
                write!(f, "Marker '{marker}' not found in '{file_name}'")
            }
            Error::MissingSegment { file_name } => {
                write!(f, "No segment after the date in '{file_name}'")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::DirectoryCreate { source, .. } => Some(source),
            Error::ConfigRead { source, .. } => Some(source.as_ref()),
            Error::ConfigWrite { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl Error {
    /// Process exit code for this class of error
    ///
    /// A batch in which some files failed exits with 1; that case is not an
    /// `Error` and is decided by the caller.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigRead { .. } => 2,
            Error::ConfigWrite { .. } => 3,
            Error::NoInput => 4,
            Error::IllegalOutputDirName { .. } => 5,
            Error::DirectoryCreate { .. } => 6,
            _ => 70,
        }
    }
}

/// Custom Result type for the renaming application
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config read error
pub fn config_read_error<E: StdError + Send + Sync + 'static>(
    err: E,
    path: PathBuf,
    detail: &str,
) -> Error {
    Error::ConfigRead {
        source: Box::new(err),
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a config write error
pub fn config_write_error<E: StdError + Send + Sync + 'static>(err: E, path: PathBuf) -> Error {
    Error::ConfigWrite {
        source: Box::new(err),
        path,
    }
}

/// Helper function to create an illegal output directory name error
pub fn illegal_output_dir_error(name: &str) -> Error {
    Error::IllegalOutputDirName {
        name: name.to_string(),
    }
}

/// Helper function to create a directory creation error
pub fn directory_create_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryCreate { source: err, path }
}

/// Helper function to create a marker-not-found error
pub fn marker_not_found_error(file_name: &str, marker: &str) -> Error {
    Error::MarkerNotFound {
        file_name: file_name.to_string(),
        marker: marker.to_string(),
    }
}

/// Helper function to create a missing segment error
pub fn missing_segment_error(file_name: &str) -> Error {
    Error::MissingSegment {
        file_name: file_name.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "copy");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("copy"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_read_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid JSON");
        let error = config_read_error(
            io_error,
            PathBuf::from("renconfig.json"),
            "expected value at line 1",
        );

        let error_string = format!("{error}");
        assert!(error_string.contains("renconfig.json"));
        assert!(
            error_string.contains("expected value at line 1"),
            "Error message should contain the detail"
        );
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_config_write_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error = config_write_error(io_error, PathBuf::from("/ro/renconfig.json"));

        let error_string = format!("{error}");
        assert!(error_string.contains("/ro/renconfig.json"));
        assert!(error_string.contains("read-only"));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_no_input_error() {
        let error = Error::NoInput;
        assert_eq!(format!("{error}"), "No files to process.");
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn test_illegal_output_dir_error() {
        let error = illegal_output_dir_error("My:Dir");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("My:Dir"),
            "Error message should contain the directory name"
        );
        assert!(error_string.contains("illegal characters"));
        assert_eq!(error.exit_code(), 5);
    }

    #[test]
    fn test_directory_create_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = directory_create_error(io_error, PathBuf::from("/test/RenamedFiles"));

        assert!(format!("{error}").contains("/test/RenamedFiles"));
        assert_eq!(error.exit_code(), 6);
    }

    #[test]
    fn test_transform_errors() {
        let error = marker_not_found_error("random.txt", "SO ");
        let error_string = format!("{error}");
        assert!(error_string.contains("random.txt"));
        assert!(error_string.contains("SO "));
        assert_eq!(error.exit_code(), 70);

        let error = missing_segment_error("SO 2020-01-15.pdf");
        assert!(format!("{error}").contains("SO 2020-01-15.pdf"));
    }

    #[test]
    fn test_path_errors() {
        let error = path_operation_error(PathBuf::from("/test/path"), "get filename");
        let error_string = format!("{error}");
        assert!(error_string.contains("get filename"));
        assert!(error_string.contains("/test/path"));

        let error = invalid_filename_error(PathBuf::from("/test/invalid"));
        assert!(format!("{error}").contains("/test/invalid"));
        assert_eq!(error.exit_code(), 70);
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );
    }
}
