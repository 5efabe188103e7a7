//! JSONL file writer for attempt events.
//!
//! Each [`AttemptEvent`] is serialized as a single JSON line with a UTC
//! `timestamp`, appended to the file via a buffered writer.

use candor_application::{AttemptEvent, AttemptLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL attempt logger that writes one JSON object per line.
///
/// Opens the file in append mode so separate runs accumulate in one trail.
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAttemptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAttemptLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create attempt log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open attempt log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AttemptLogger for JsonlAttemptLogger {
    fn record(&self, event: AttemptEvent) {
        let Ok(mut record) = serde_json::to_value(&event) else {
            return;
        };

        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        if let Some(map) = record.as_object_mut() {
            map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));
        }

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only; flush each record for crash safety
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAttemptLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_tagged_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");
        let logger = JsonlAttemptLogger::new(&path).unwrap();

        logger.record(AttemptEvent::CandidateDrafted {
            attempt: 1,
            bytes: 64,
        });
        logger.record(AttemptEvent::VerdictReached {
            attempt: 1,
            is_sycophantic: true,
            confidence: 0.9,
            reason: "unearned praise".to_string(),
        });
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "candidate_drafted");
        assert_eq!(first["bytes"], 64);
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "verdict_reached");
        assert_eq!(second["reason"], "unearned praise");
    }

    #[test]
    fn test_appends_across_logger_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");

        for attempt in 1..=2 {
            let logger = JsonlAttemptLogger::new(&path).unwrap();
            logger.record(AttemptEvent::GenerationFailed {
                attempt,
                error: "connection refused".to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim().lines().count(), 2);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("attempts.jsonl");
        let logger = JsonlAttemptLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path);
        assert!(path.parent().unwrap().exists());
    }
}
