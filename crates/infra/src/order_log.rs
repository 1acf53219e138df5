//! Structured log records emitted by the order workflow, and the sinks that
//! receive them.
//!
//! A record always has the shape `{ "level", "msg", "time" }`, so external
//! tooling can parse it regardless of which sink wrote it.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// One structured log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: String,
    pub msg: String,
    /// RFC 3339 UTC timestamp.
    pub time: String,
}

impl LogRecord {
    pub fn new(level: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            msg: msg.into(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new("INFO", msg)
    }

    /// Pretty JSON with single-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        {
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
            self.serialize(&mut ser)?;
        }
        String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
    }
}

/// Sink for workflow log records.
///
/// Logging is best-effort: a sink that fails to write reports the failure
/// through `tracing` instead of failing the business operation.
pub trait OrderLogger: Send + Sync {
    fn log(&self, record: &LogRecord);
}

impl<L> OrderLogger for std::sync::Arc<L>
where
    L: OrderLogger + ?Sized,
{
    fn log(&self, record: &LogRecord) {
        (**self).log(record)
    }
}

/// Forwards records to the process-wide `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingOrderLogger {
    service_name: String,
}

impl TracingOrderLogger {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

impl OrderLogger for TracingOrderLogger {
    fn log(&self, record: &LogRecord) {
        tracing::info!(
            service = %self.service_name,
            level = %record.level,
            time = %record.time,
            "{}",
            record.msg
        );
    }
}

/// Writes each record as `"<service> :: "` followed by pretty JSON.
#[derive(Debug)]
pub struct JsonOrderLogger<W> {
    service_name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonOrderLogger<W> {
    pub fn new(service_name: impl Into<String>, writer: W) -> Self {
        Self {
            service_name: service_name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_record(&self, record: &LogRecord) -> std::io::Result<()> {
        let json = record.to_pretty_json().map_err(std::io::Error::other)?;
        self.with_writer(|w| {
            writeln!(w, "{} :: {}", self.service_name, json)?;
            w.flush()
        })
    }
}

impl<W: Write + Send> OrderLogger for JsonOrderLogger<W> {
    fn log(&self, record: &LogRecord) {
        if let Err(err) = self.write_record(record) {
            tracing::warn!(service = %self.service_name, error = %err, "failed to write order log record");
        }
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemoryOrderLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryOrderLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OrderLogger for MemoryOrderLogger {
    fn log(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}
