use serde::{Deserialize, Serialize};

/// Severity of an alert toast
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    #[default]
    Error,
}

/// A transient notification shown to the user as a toast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    /// Unique within the queue, increasing with creation time
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: AlertKind,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Alert {
    pub fn error(id: u64, message: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id,
            kind: AlertKind::Error,
            message: message.into(),
            title,
        }
    }

    /// Single-line form used for the error log: `[title] message`
    pub fn format(&self) -> String {
        format!("[{}] {}", self.title.as_deref().unwrap_or_default(), self.message)
    }
}
