/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Name of the configuration file stored next to the executable
pub const CONFIG_FILE_NAME: &str = "renconfig.json";

/// Marker used when the configuration does not provide one
pub const DEFAULT_MARKER: &str = "SO ";

/// Whether files are copied rather than renamed when not configured
pub const DEFAULT_MAKE_COPY: bool = true;

/// Output directory used in copy mode when not configured
pub const DEFAULT_OUTPUT_DIR: &str = "RenamedFiles";

/// Prefix given to filenames that could not be transformed
pub const ERROR_PREFIX: &str = "_ERR_";

/// Separator between the segments of a filename
pub const SEGMENT_SEPARATOR: &str = " - ";

/// Joins the reformatted date segment to the title segment
pub const SEGMENT_MERGER: &str = "_";

/// Characters that are not allowed in the output directory name.
///
/// These are the characters Windows rejects in a directory name. The check
/// is applied on every platform.
pub const ILLEGAL_DIR_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Log file is disabled unless one is requested
pub const LOG_FILE_DEFAULT: &str = "";

/// Help text for the files argument
pub const FILES_HELP: &str = "Files to rename or copy";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific config file instead of the one next to the executable";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Show what would happen without renaming or copying any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only print flagged names and failures";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the no-pause command-line option
pub const NO_PAUSE_HELP: &str = "Do not wait for Enter after an error";
