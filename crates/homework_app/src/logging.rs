//! Process logging initialization for the homework bot.
//!
//! Appends to `./output.log` in the current working directory and mirrors
//! every line to stdout.

use std::fs::{File, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "./output.log";

/// Install a stdout logger plus, when the file can be opened, an appending
/// `./output.log` logger.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )];
    if let Some(file_logger) = create_file_logger(Path::new(LOG_FILE), level, config) {
        loggers.push(file_logger);
    }

    let _ = CombinedLogger::init(loggers);
}

// Timestamp, level and file:line on every line.
fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Trace)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn file_logger_appends_to_existing_log() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("output.log");
        fs::write(&path, "previous run\n").unwrap();

        let logger = create_file_logger(&path, LevelFilter::Info, build_config());

        assert!(logger.is_some());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");
    }

    #[test]
    fn unwritable_path_disables_file_logging() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("output.log");

        assert!(create_file_logger(&path, LevelFilter::Info, build_config()).is_none());
    }
}
