use std::path::PathBuf;

use atty::Stream;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::config::config_path_beside_executable;
use crate::constants::{
    CONFIG_HELP, DRY_RUN_HELP, FILES_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, NO_PAUSE_HELP,
    QUIET_HELP, VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after an error when files were dropped onto the executable.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `files`: Files to rename or copy
/// - `config`: Path to the configuration file
/// - `dry`: Run without renaming or copying any files
/// - `verbose`: Increase verbosity level
/// - `quiet`: Only print flagged names and failures
/// - `log_file`: Also log to a file
/// - `no_pause`: Do not wait for Enter after an error
pub fn build_command() -> Command {
    // define positional arg for the files to process
    let arg_files = Arg::new("files")
        .help(FILES_HELP)
        .num_args(0..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf));

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .value_parser(value_parser!(PathBuf));

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(ArgAction::SetTrue)
        .conflicts_with("verbose");

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    let arg_no_pause = Arg::new("no_pause")
        .long("no-pause")
        .help(NO_PAUSE_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_files)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_no_pause)
        .arg(arg_verbose)
        .arg(arg_quiet)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the input files in the order they were given
pub fn get_input_files(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default()
}

/// Gets the configuration file path
///
/// Falls back to `renconfig.json` next to the executable when `--config` is
/// not given.
///
/// # Errors
/// Returns an error if the executable path cannot be determined
pub fn get_config_path(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(path.clone()),
        None => config_path_beside_executable(),
    }
}

/// Whether this is a dry run
pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Whether to wait for Enter after an error
pub fn should_pause(matches: &ArgMatches) -> bool {
    !matches.get_flag("no_pause")
}

/// Gets the log level from `--quiet` and the number of `-v` flags
///
/// # Examples
/// ```
/// # use renmark::cli::{build_command, get_verbosity};
/// # use renmark::logging::LogLevel;
/// let matches = build_command().get_matches_from(["ren", "-q", "a.txt"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Quiet);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_flags(matches.get_flag("quiet"), matches.get_count("verbose"))
}

/// Gets the log file path, empty when file logging is off
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}
