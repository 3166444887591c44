use crate::models::{LogLevel, LogRecord};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

/// Logging collaborator used by the UI store.
///
/// Reporting is fire-and-forget: implementations must not fail back into the caller.
pub trait StoreLog: Send + Sync {
    fn info(&self, message: &str, details: &[Value]);
    fn error(&self, message: &str);
}

/// Logger that only forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl StoreLog for TracingLog {
    fn info(&self, message: &str, details: &[Value]) {
        if details.is_empty() {
            tracing::info!("{}", message);
        } else {
            let details = Value::from(details.to_vec());
            tracing::info!(%details, "{}", message);
        }
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// In-memory log buffer that keeps the most recent records
pub struct LogService {
    records: RwLock<VecDeque<LogRecord>>,

    /// Maximum records to keep in memory
    max_records: usize,
}

impl LogService {
    /// Create a new log service
    pub fn new(max_records: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::with_capacity(max_records)),
            max_records,
        }
    }

    fn push(&self, record: LogRecord) {
        match record.level {
            LogLevel::Info => tracing::info!("{}", record.format()),
            LogLevel::Warning => tracing::warn!("{}", record.format()),
            LogLevel::Error => tracing::error!("{}", record.format()),
        }

        if self.max_records == 0 {
            return;
        }

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        // Remove oldest if at capacity
        if records.len() >= self.max_records {
            records.pop_front();
        }

        records.push_back(record);
    }

    /// Log a warning that did not come from the store
    pub fn warn(&self, message: &str) {
        self.push(LogRecord::new(LogLevel::Warning, message));
    }

    /// Get all records in memory, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.iter().cloned().collect()
    }

    /// Get records filtered by level
    pub fn records_by_level(&self, level: LogLevel) -> Vec<LogRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.iter().filter(|r| r.level == level).cloned().collect()
    }

    /// Get recent records (last N)
    pub fn recent(&self, count: usize) -> Vec<LogRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let skip = records.len().saturating_sub(count);
        records.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all in-memory records
    pub fn clear(&self) {
        self.records.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new(500)
    }
}

impl StoreLog for LogService {
    fn info(&self, message: &str, details: &[Value]) {
        self.push(LogRecord::new(LogLevel::Info, message).with_details(details));
    }

    fn error(&self, message: &str) {
        self.push(LogRecord::new(LogLevel::Error, message));
    }
}
