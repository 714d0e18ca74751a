//! Logging initialization for the session replayer.
//!
//! File output goes to `./newsdesk.log` in the current working directory.

use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "./newsdesk.log";

/// Where replay diagnostics are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogDestination {
    /// ./newsdesk.log only.
    File,
    /// Terminal only.
    #[default]
    Terminal,
    /// Terminal and ./newsdesk.log.
    Both,
}

/// Installs the global logger. `verbose` lowers the level from info to debug.
pub fn initialize(destination: LogDestination, verbose: bool) {
    let _ = CombinedLogger::init(build_loggers(destination, verbose, Path::new(LOG_FILE)));
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn build_loggers(
    destination: LogDestination,
    verbose: bool,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let level = level_for(verbose);
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = create_file_logger(log_path, level, config) {
            loggers.push(file_logger);
        }
    }
    loggers
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_destinations_create_the_log_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("newsdesk.log");

        let loggers = build_loggers(LogDestination::File, false, &path);
        assert_eq!(loggers.len(), 1);
        assert_eq!(loggers[0].level(), LevelFilter::Info);
        assert!(path.exists());

        let loggers = build_loggers(LogDestination::Both, true, &path);
        assert_eq!(loggers.len(), 2);
        assert!(loggers.iter().all(|l| l.level() == LevelFilter::Debug));
    }

    #[test]
    fn terminal_destination_writes_no_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("newsdesk.log");

        let loggers = build_loggers(LogDestination::Terminal, false, &path);
        assert_eq!(loggers.len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_log_path_falls_back_to_terminal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("newsdesk.log");

        let loggers = build_loggers(LogDestination::Both, false, &path);
        assert_eq!(loggers.len(), 1);
    }
}
