//! Append-mode file sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

enum Target {
    File(BufWriter<File>),
    Stderr,
}

/// Appends one line per record to a file.
pub struct FileSink {
    path: PathBuf,
    target: Mutex<Target>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path)?;
        Ok(Self {
            path,
            target: Mutex::new(Target::File(BufWriter::new(file))),
        })
    }

    /// Like [`FileSink::new`], but writes to stderr when the file cannot be
    /// opened.
    pub fn open_or_stderr(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let target = match Self::open(&path) {
            Ok(file) => Target::File(BufWriter::new(file)),
            Err(err) => {
                eprintln!("[redlog-error] {}; writing to stderr instead", err);
                Target::Stderr
            }
        };
        Self {
            path,
            target: Mutex::new(target),
        }
    }

    fn open(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False when output has fallen back to stderr.
    pub fn is_file(&self) -> bool {
        matches!(*self.target.lock(), Target::File(_))
    }
}

impl Sink for FileSink {
    fn write(&self, formatted: &str) -> Result<()> {
        let mut target = self.target.lock();
        match &mut *target {
            Target::File(writer) => {
                writer.write_all(formatted.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            Target::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(formatted.as_bytes())?;
                stderr.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match &mut *self.target.lock() {
            Target::File(writer) => writer.flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends_lines() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("app.log");

        {
            let sink = FileSink::new(&path).expect("opens");
            sink.write("first").expect("writes");
            sink.write("second").expect("writes");
        }
        {
            let sink = FileSink::new(&path).expect("reopens");
            sink.write("third").expect("writes");
            sink.flush().expect("flushes");
        }

        let content = std::fs::read_to_string(&path).expect("readable");
        assert_eq!(content, "first\nsecond\nthird\n");
    }

    #[test]
    fn test_new_reports_unopenable_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("app.log");

        let err = FileSink::new(&path).err().expect("cannot open");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_open_or_stderr_falls_back() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("app.log");

        let sink = FileSink::open_or_stderr(&path);
        assert!(!sink.is_file());
        assert!(sink.write("goes to stderr").is_ok());
        assert_eq!(sink.path(), path.as_path());
    }
}
