//! Log writer module
//!
//! Routes info and error lines to stdout/stderr or to append-mode files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LogTarget {
    /// File target when a path is configured, `console` otherwise
    fn open(path: Option<&str>, console: Self) -> io::Result<Self> {
        match path {
            Some(path) => Ok(Self::File(Mutex::new(open_log_file(Path::new(path))?))),
            None => Ok(console),
        }
    }

    fn write_line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                // a poisoned lock or full disk drops the line
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// Thread-safe log writer with separate info and error targets
pub struct LogWriter {
    info: LogTarget,
    error: LogTarget,
}

impl LogWriter {
    fn new(info_file: Option<&str>, error_file: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            info: LogTarget::open(info_file, LogTarget::Stdout)?,
            error: LogTarget::open(error_file, LogTarget::Stderr)?,
        })
    }

    /// Info and access lines
    pub fn write_info(&self, message: &str) {
        self.info.write_line(message);
    }

    pub fn write_error(&self, message: &str) {
        self.error.write_line(message);
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global log writer
///
/// Fails if a log file cannot be opened or the writer is already installed.
pub fn init(info_file: Option<&str>, error_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(info_file, error_file)?;
    LOG_WRITER
        .set(writer)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "Log writer already initialized"))
}

/// The global log writer, `None` before [`init`]
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
