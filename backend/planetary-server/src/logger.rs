use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
enum Sink {
    File(File),
    ColoredStdout(ColoredLevelConfig),
    PlainStdout,
}

/// Install the global logger.
///
/// Lines look like `[2026-10-19T08:00:00Z - INFO] message [src/main.rs:12]`.
/// With `log_file` set, lines are appended to that file and `colored` is
/// ignored. sqlx statement logging is capped at `warn`.
pub fn initialize(
    log_level: planetary_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = *log_level;

    let sink = match log_file.as_deref() {
        Some(path) => Sink::File(open_log_file(path)?),
        None if colored => Sink::ColoredStdout(level_colors()),
        None => Sink::PlainStdout,
    };

    let output = match sink {
        Sink::File(file) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(file),
        Sink::ColoredStdout(colors) => Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, message, record, colors.color(record.level()))
            })
            .chain(std::io::stdout()),
        Sink::PlainStdout => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {:?} to {}", level, path.display()),
        None => info!("Logging at {:?} to stdout", level),
    }

    Ok(())
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
