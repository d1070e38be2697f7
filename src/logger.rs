/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::logger
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1
  ------------------------------------------------------------
  Purpose:
    Provide structured, append-only logging for Deb-Stamp
    runs and seal log files with a digest on completion.

  Security / Safety Notes:
    Log entries carry artifact paths and digests only; the
    artifact bodies are never logged.

  Dependencies:
    std::fs::File, std::sync::Mutex, chrono for timestamps,
    sha2 for integrity hashing.

  Operational Scope:
    Shared by the entry point across a single invocation.

  Revision History:
    2026-10-14 COD  Established logging module for Deb-Stamp.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Append-only logging with UTC timestamps
    - Deterministic formatting for auditability
    - Graceful error propagation on I/O failures
============================================================*/

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::error::{DebstampError, Result};

/// Structured log level for Deb-Stamp events.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn always_echoed(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

/// Logger writing to stderr and, optionally, to an append-only file.
pub struct Logger {
    file: Option<Mutex<BufWriter<File>>>,
    path: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    /// Build a logger; `path` enables the file sink.
    pub fn new(path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let file = match path.as_deref() {
            Some(file_path) => Some(Mutex::new(BufWriter::new(open_log(file_path)?))),
            None => None,
        };

        Ok(Self {
            file,
            path,
            verbose,
        })
    }

    /// Emit a log entry with the given level, code, and message.
    pub fn log<S: AsRef<str>>(&self, level: LogLevel, code: &str, message: S) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let payload = format_entry(&timestamp, level, code, message.as_ref());

        if self.verbose || level.always_echoed() {
            eprintln!("{payload}");
        }

        let Some(file) = &self.file else {
            return;
        };
        if let Ok(mut guard) = file.lock() {
            if writeln!(guard, "{payload}").is_err() || guard.flush().is_err() {
                eprintln!(
                    "{}",
                    format_entry(
                        &timestamp,
                        LogLevel::Error,
                        "LOGGER",
                        "Failed to write to log file"
                    )
                );
            }
        }
    }

    pub fn info<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Info, code, message);
    }

    pub fn warn<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Warn, code, message);
    }

    pub fn error<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Error, code, message);
    }

    pub fn debug<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Debug, code, message);
    }

    /// Return the path backing this logger, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write `<log>.hash` holding the SHA-256 digest of the log file.
    pub fn finalize(&self) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };

        let data = std::fs::read(path).map_err(|err| {
            DebstampError::Filesystem(format!(
                "Failed to read log for hashing {}: {err}",
                path.display()
            ))
        })?;
        let digest = Sha256::digest(&data);

        let hash_path = hash_path_for(path);
        let line = format!(
            "{:x}  {}\n",
            digest,
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        std::fs::write(&hash_path, line).map_err(|err| {
            DebstampError::Filesystem(format!(
                "Failed to write hash file {}: {err}",
                hash_path.display()
            ))
        })?;
        Ok(())
    }
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            DebstampError::Filesystem(format!(
                "Failed to create log directory {}: {err}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| {
            DebstampError::Filesystem(format!(
                "Failed to open log file {}: {err}",
                path.display()
            ))
        })
}

fn format_entry(timestamp: &str, level: LogLevel, code: &str, message: &str) -> String {
    format!("{timestamp} [{}] [{code}] {message}", level.as_str())
}

fn hash_path_for(path: &Path) -> PathBuf {
    let mut hash_os = path.as_os_str().to_os_string();
    hash_os.push(".hash");
    PathBuf::from(hash_os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_format() {
        let entry = format_entry("2026-10-14T00:00:00Z", LogLevel::Warn, "STAMP", "hello");
        assert_eq!(entry, "2026-10-14T00:00:00Z [WARN] [STAMP] hello");
    }

    #[test]
    fn file_sink_appends_and_finalize_writes_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("debstamp.log");

        let logger = Logger::new(Some(path.clone()), false).unwrap();
        logger.info("INIT", "first");
        logger.debug("ENV", "second");
        logger.finalize().unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] [INIT] first"));
        assert!(lines[1].ends_with("[DEBUG] [ENV] second"));

        let hash = std::fs::read_to_string(dir.path().join("logs").join("debstamp.log.hash"))
            .unwrap();
        let expected = format!("{:x}  debstamp.log\n", Sha256::digest(log.as_bytes()));
        assert_eq!(hash, expected);
    }

    #[test]
    fn finalize_without_file_is_noop() {
        let logger = Logger::new(None, false).unwrap();
        assert!(logger.path().is_none());
        logger.finalize().unwrap();
    }
}
