use std::process::exit;

use human_panic::setup_panic;
use log::{error, warn};

use renmark::cli::{
    check_for_stdout_stream, get_config_path, get_input_files, get_log_file, get_matches,
    get_verbosity, is_dry_run, should_pause,
};
use renmark::prelude::*;

fn main() {
    setup_panic!();

    let matches = get_matches();

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches);
    if let Err(e) = init_logger(verbosity, &log_file) {
        // Usually the log file cannot be opened; keep going with stdout only.
        if init_default_logger().is_ok() {
            warn!("Failed to open log file '{log_file}': {e}");
        }
    }

    let files = get_input_files(&matches);
    let result = get_config_path(&matches).and_then(|config_path| {
        let options = ProcessingOptions {
            config_path,
            dry_run: is_dry_run(&matches),
        };
        run(&files, &options)
    });

    let code = match result {
        Ok(context) if context.has_failures() => 1,
        Ok(_) => 0,
        Err(e) => {
            error!("{e}");
            if should_pause(&matches) {
                check_for_stdout_stream();
            }
            e.exit_code()
        }
    };

    exit(code);
}
