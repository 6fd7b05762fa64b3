use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::LoggerError;

/// Destination for encoded log lines.
pub(crate) enum Sink {
    Stdout,
    Stderr,
    File { path: PathBuf, file: Mutex<File> },
}

impl Sink {
    /// Opens a sink from its identifier: `stdout`, `stderr`, a path, or a `file://` path.
    /// Files are created when missing and always appended to.
    pub fn open(identifier: &str) -> Result<Self, LoggerError> {
        match identifier {
            "stdout" => Ok(Sink::Stdout),
            "stderr" => Ok(Sink::Stderr),
            other => {
                let path = Path::new(other.strip_prefix("file://").unwrap_or(other));
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggerError::OpenSink {
                        path: path.to_path_buf(),
                        source,
                    })?;

                Ok(Sink::File {
                    path: path.to_path_buf(),
                    file: Mutex::new(file),
                })
            }
        }
    }

    pub fn open_all(identifiers: &[String]) -> Result<Vec<Sink>, LoggerError> {
        identifiers.iter().map(|id| Sink::open(id)).collect()
    }

    /// Writes one complete line. The whole buffer goes out under a single lock so
    /// concurrent writers never interleave inside a line.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().write_all(line),
            Sink::Stderr => io::stderr().lock().write_all(line),
            Sink::File { file, .. } => file
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write_all(line),
        }
    }

    pub fn sync(&self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().flush(),
            Sink::Stderr => io::stderr().lock().flush(),
            Sink::File { file, .. } => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                file.flush()?;
                file.sync_data()
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Sink::Stdout => "stdout".to_string(),
            Sink::Stderr => "stderr".to_string(),
            Sink::File { path, .. } => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_streams_by_name() {
        assert!(matches!(Sink::open("stdout").unwrap(), Sink::Stdout));
        assert!(matches!(Sink::open("stderr").unwrap(), Sink::Stderr));
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "existing\n").unwrap();

        let sink = Sink::open(path.to_str().unwrap()).unwrap();
        sink.write_line(b"first\n").unwrap();
        sink.write_line(b"second\n").unwrap();
        sink.sync().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nfirst\nsecond\n");
        assert_eq!(sink.name(), path.display().to_string());
    }

    #[test]
    fn file_url_prefix_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url.log");

        let sink = Sink::open(&format!("file://{}", path.display())).unwrap();
        sink.write_line(b"line\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn unopenable_path_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");

        match Sink::open(path.to_str().unwrap()) {
            Err(LoggerError::OpenSink { path: reported, .. }) => assert_eq!(reported, path),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("opening a file in a missing directory should fail"),
        }
    }
}
