//! Logger module
//!
//! Plain-line logging for the helper and the demo server. Info and access
//! lines go to the info target, warnings and errors to the error target.
//!
//! Before [`init`] is called, messages go straight to stdout/stderr, so the
//! library can log from handlers that run without the demo server.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }
}

/// Send info and access lines to `access_log_file` and warnings and errors
/// to `error_log_file`; `None` keeps the console target
///
/// Should be called once at application startup.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> std::io::Result<()> {
    writer::init(access_log_file, error_log_file)
}

fn emit_raw(level: Level, line: &str) {
    match (writer::get(), level) {
        (Some(w), Level::Info) => w.write_info(line),
        (Some(w), _) => w.write_error(line),
        (None, Level::Info) => println!("{line}"),
        (None, _) => eprintln!("{line}"),
    }
}

fn emit(level: Level, message: fmt::Arguments<'_>) {
    emit_raw(level, &format!("{} {message}", level.tag()));
}

pub fn log_server_stop() {
    emit(Level::Info, format_args!("Shutdown requested, no longer accepting connections"));
}

pub fn log_info(message: &str) {
    emit(Level::Info, format_args!("{message}"));
}

pub fn log_connection_error(err: &impl fmt::Debug) {
    emit(Level::Error, format_args!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    emit(Level::Error, format_args!("{message}"));
}

pub fn log_warning(message: &str) {
    emit(Level::Warn, format_args!("{message}"));
}

/// Access lines carry no level tag
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    emit_raw(Level::Info, &entry.format(format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(Level::Info.tag(), "[INFO]");
        assert_eq!(Level::Warn.tag(), "[WARN]");
        assert_eq!(Level::Error.tag(), "[ERROR]");
    }
}
