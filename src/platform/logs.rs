// ABOUTME: Log tail types and the capability trait that starts a tail.
// ABOUTME: LogTailGuard stops the tail exactly once when it goes out of scope.

use crate::diagnostics::Warned;
use crate::types::{AppName, SpaceGuid};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

/// Message-type tag on a log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    /// Emitted by the build process (the `STG` tag on the wire).
    Staging,
    /// Anything else, keeping the raw tag (`APP/PROC/WEB`, `RTR`, `OUT`, ...).
    Runtime(String),
}

impl LogSource {
    /// Classify a raw wire tag.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "STG" {
            LogSource::Staging
        } else {
            LogSource::Runtime(tag.to_string())
        }
    }
}

/// A single log line from the platform's log backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogMessage {
    pub text: String,
    pub source: LogSource,
    pub timestamp: DateTime<Utc>,
    /// Instance that emitted the line, e.g. `"0"` or a staging task id.
    pub source_instance: String,
}

impl LogMessage {
    pub fn new(
        text: impl Into<String>,
        source: LogSource,
        timestamp: DateTime<Utc>,
        source_instance: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source,
            timestamp,
            source_instance: source_instance.into(),
        }
    }

    pub fn is_staging(&self) -> bool {
        self.source == LogSource::Staging
    }
}

/// Errors surfaced on a log tail's error stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogTailError {
    /// The log backend did not answer in time.
    #[error("timed out connecting to the log backend")]
    Timeout,

    #[error("{0}")]
    Stream(String),
}

/// Stops a running log tail and closes its streams.
pub struct LogTailCancel(Box<dyn FnOnce() + Send>);

impl LogTailCancel {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self(Box::new(cancel))
    }

    fn invoke(self) {
        (self.0)()
    }
}

impl std::fmt::Debug for LogTailCancel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LogTailCancel")
    }
}

/// A started log tail: two streams plus the handle that stops them.
#[derive(Debug)]
pub struct LogTail {
    pub messages: mpsc::Receiver<LogMessage>,
    pub errors: mpsc::Receiver<LogTailError>,
    pub cancel: LogTailCancel,
}

impl LogTail {
    /// Split into the consumable streams and a guard owning the cancellation.
    pub fn into_guarded(self) -> (LogStreams, LogTailGuard) {
        let streams = LogStreams {
            messages: self.messages,
            errors: self.errors,
        };
        (streams, LogTailGuard::new(self.cancel))
    }
}

/// The two streams of a log tail.
#[derive(Debug)]
pub struct LogStreams {
    pub messages: mpsc::Receiver<LogMessage>,
    pub errors: mpsc::Receiver<LogTailError>,
}

/// Runs the tail's cancellation once, on `stop()` or on drop, whichever is first.
#[derive(Debug)]
#[must_use = "dropping the guard stops the log tail immediately"]
pub struct LogTailGuard {
    cancel: Option<LogTailCancel>,
}

impl LogTailGuard {
    pub fn new(cancel: LogTailCancel) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::debug!("stopping log tail");
            cancel.invoke();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for LogTailGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Log streaming operations.
#[async_trait]
pub trait LogOps: Send + Sync {
    /// Start tailing logs for an application.
    async fn start_log_tail(&self, app_name: &AppName, space: &SpaceGuid) -> Warned<LogTail>;
}
