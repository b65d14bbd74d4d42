//! Structured JSONL logging.
//!
//! The engine never logs on its own; a host that wants pass telemetry hands
//! the grid a `Logger` over any `LogSink`. Events serialize one JSON object
//! per line. Logging failures are swallowed by callers and never affect
//! layout results.

use serde::Serialize;
use serde_json::{Map, Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

pub type LogFields = Map<String, Value>;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub ts_ms: u128,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
    #[serde(skip_serializing_if = "LogFields::is_empty", default)]
    pub fields: LogFields,
}

impl LogEvent {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ts_ms: unix_ms(),
            level,
            target: target.into(),
            message: message.into(),
            fields: LogFields::new(),
        }
    }

    pub fn with_fields(
        level: LogLevel,
        target: impl Into<String>,
        message: impl Into<String>,
        fields: LogFields,
    ) -> Self {
        Self {
            fields,
            ..Self::new(level, target, message)
        }
    }
}

fn unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

pub type LoggingResult<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait LogSink: Send + Sync {
    fn log(&self, event: &LogEvent) -> LoggingResult<()>;
}

/// Cloneable façade over a shared sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new<S>(sink: S) -> Self
    where
        S: LogSink + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn log(&self, level: LogLevel, target: &str, message: &str) -> LoggingResult<()> {
        self.sink.log(&LogEvent::new(level, target, message))
    }

    pub fn log_with_fields(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: LogFields,
    ) -> LoggingResult<()> {
        self.sink
            .log(&LogEvent::with_fields(level, target, message, fields))
    }

    pub fn log_event(&self, event: LogEvent) -> LoggingResult<()> {
        self.sink.log(&event)
    }
}

/// JSONL sink appending to one file, truncating once `max_bytes` would be
/// exceeded (0 disables truncation).
pub struct FileSink {
    path: PathBuf,
    max_bytes: u64,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>, max_bytes: u64) -> LoggingResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(Self {
            path,
            max_bytes,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, mut line: String) -> LoggingResult<()> {
        line.push('\n');
        let mut guard = self.writer.lock().expect("logger mutex poisoned");

        if self.should_truncate(guard.get_ref(), line.len() as u64)? {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?;
            *guard = BufWriter::new(file);
        }

        guard.write_all(line.as_bytes())?;
        guard.flush()?;
        Ok(())
    }

    fn should_truncate(&self, file: &File, incoming_len: u64) -> std::io::Result<bool> {
        if self.max_bytes == 0 {
            return Ok(false);
        }
        let current = file.metadata()?.len();
        Ok(current + incoming_len > self.max_bytes)
    }
}

impl LogSink for FileSink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        let line = serde_json::to_string(event)?;
        self.write_line(line)
    }
}

/// In-memory sink. Clones share the same buffer, so a host (or test) can
/// keep one handle and hand another to a `Logger`.
#[derive(Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("memory sink mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("memory sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        self.events
            .lock()
            .expect("memory sink mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}

pub fn field_map() -> LogFields {
    LogFields::new()
}

pub fn event_with_fields(
    level: LogLevel,
    target: &str,
    message: &str,
    fields: impl IntoIterator<Item = (String, Value)>,
) -> LogEvent {
    let mut map = LogFields::new();
    for (key, value) in fields {
        map.insert(key, value);
    }
    LogEvent::with_fields(level, target, message, map)
}

pub fn json_kv(key: &str, value: impl Into<Value>) -> (String, Value) {
    (key.to_string(), value.into())
}

pub fn json_str(key: &str, value: impl Into<String>) -> (String, Value) {
    (key.to_string(), json!(value.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trellis-logging-{}-{}.jsonl", std::process::id(), tag))
    }

    #[test]
    fn memory_sink_shares_its_buffer_across_clones() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());

        logger.log(LogLevel::Info, "trellis::test", "first").unwrap();
        let event = event_with_fields(
            LogLevel::Warn,
            "trellis::test",
            "second",
            [json_kv("count", json!(2))],
        );
        logger.log_event(event).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].fields.get("count"), Some(&json!(2)));
    }

    #[test]
    fn events_serialize_one_object_per_line() {
        let event = event_with_fields(
            LogLevel::Debug,
            "trellis::grid",
            "pass_started",
            [json_kv("columns", json!(3))],
        );
        let line = serde_json::to_string(&event).unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], json!("debug"));
        assert_eq!(value["fields"]["columns"], json!(3));

        let bare = LogEvent::new(LogLevel::Info, "trellis::grid", "pass_completed");
        let line = serde_json::to_string(&bare).unwrap();
        assert!(!line.contains("fields"));
    }

    #[test]
    fn file_sink_appends_jsonl() {
        let path = temp_log_path("append");
        let _ = std::fs::remove_file(&path);

        let logger = Logger::new(FileSink::new(&path, 0).unwrap());
        logger.log(LogLevel::Info, "trellis::test", "one").unwrap();
        logger.log(LogLevel::Info, "trellis::test", "two").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(value["message"], json!("two"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_sink_truncates_at_max_bytes() {
        let path = temp_log_path("truncate");
        let _ = std::fs::remove_file(&path);

        let logger = Logger::new(FileSink::new(&path, 64).unwrap());
        logger.log(LogLevel::Info, "trellis::test", "one").unwrap();
        logger.log(LogLevel::Info, "trellis::test", "two").unwrap();
        logger.log(LogLevel::Info, "trellis::test", "three").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("three"));

        let _ = std::fs::remove_file(&path);
    }
}
