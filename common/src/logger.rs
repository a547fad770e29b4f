use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{create_dir_all, OpenOptions};
use std::path::Path;

/// Maps a textual level to a filter. Unknown values fall back to `Info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Builds the dispatcher: coloured level tags on stdout, plus an append-mode
/// log file when `log_file_path` is given.
pub fn build_dispatch(
    log_level: &str,
    log_file_path: Option<&str>,
) -> Result<Dispatch, fern::InitError> {
    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(parse_level(log_level))
        .chain(std::io::stdout());

    if let Some(path) = log_file_path {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }

        let log_file = OpenOptions::new().create(true).append(true).open(path)?;
        dispatch = dispatch.chain(log_file);
    }

    Ok(dispatch)
}

/// Installs the global logger. Fails if the log file cannot be opened or a
/// logger is already installed.
pub fn init_logger(log_level: &str, log_file_path: Option<&str>) -> Result<(), fern::InitError> {
    build_dispatch(log_level, log_file_path)?.apply()?;
    Ok(())
}
