use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line reported by the UI store to its logger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Unique record ID
    pub id: Uuid,

    /// Log level
    pub level: LogLevel,

    /// Human-readable message
    pub message: String,

    /// Structured details attached to the message (alert maps, ids, names)
    #[serde(default)]
    pub details: Vec<serde_json::Value>,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

/// Log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            details: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(mut self, details: &[serde_json::Value]) -> Self {
        self.details = details.to_vec();
        self
    }

    /// Format for display
    pub fn format(&self) -> String {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        let level = match self.level {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        };

        let details = self
            .details
            .iter()
            .map(|detail| match detail {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>();

        if details.is_empty() {
            format!("[{}] {} | {}", timestamp, level, self.message)
        } else {
            format!("[{}] {} | {} {}", timestamp, level, self.message, details.join(" "))
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}
