use crate::models::Alert;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Alerts waiting to be shown as toasts, keyed by id.
///
/// Ids are issued in increasing order, so iterating the map yields alerts in
/// insertion order (oldest first). Alerts never expire on their own; the
/// presentation layer decides when to clear them.
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    alerts: BTreeMap<u64, Alert>,
    last_id: u64,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error alert and return its id
    pub fn push(&mut self, message: impl Into<String>, title: Option<String>) -> u64 {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        self.push_at(now, message, title)
    }

    /// Add an error alert created at `now_millis`
    pub(crate) fn push_at(
        &mut self,
        now_millis: u64,
        message: impl Into<String>,
        title: Option<String>,
    ) -> u64 {
        let id = self.next_id(now_millis);
        self.alerts.insert(id, Alert::error(id, message, title));
        id
    }

    // Timestamp ids collide within the same millisecond; bump past the last one.
    fn next_id(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    /// Remove an alert; unknown ids are ignored
    pub fn remove(&mut self, id: u64) -> Option<Alert> {
        self.alerts.remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Alert> {
        self.alerts.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.alerts.contains_key(&id)
    }

    /// Alerts in display order
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.values()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// JSON object keyed by id, used when reporting the queue to the logger
    pub fn to_json(&self) -> Value {
        let map = self
            .alerts
            .iter()
            .map(|(id, alert)| {
                let value = serde_json::to_value(alert).unwrap_or(Value::Null);
                (id.to_string(), value)
            })
            .collect::<Map<_, _>>();
        Value::Object(map)
    }
}
