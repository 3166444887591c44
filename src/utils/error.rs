use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Network(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("Unknown page or setting name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializationError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How the UI store reacts to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials were rejected or have expired; the user must log in again
    Authentication,
    /// Anything else; shown to the user as-is
    Generic,
}

pub type Result<T> = std::result::Result<T, UiError>;

impl UiError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Network(_)
            | Self::Rpc { .. }
            | Self::InvalidName(_)
            | Self::ConfigError(_)
            | Self::IoError(_)
            | Self::ParseError(_)
            | Self::SerializationError(_)
            | Self::Other(_) => ErrorKind::Generic,
        }
    }

    pub fn is_authentication(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(UiError::authentication("expired").kind(), ErrorKind::Authentication);
        assert_eq!(UiError::Network("timeout".into()).kind(), ErrorKind::Generic);
        assert_eq!(UiError::from(anyhow::anyhow!("disk full")).kind(), ErrorKind::Generic);
        assert!(!UiError::InvalidName("swaps".into()).is_authentication());
    }

    #[test]
    fn test_message_is_passed_through() {
        assert_eq!(UiError::Network("disk full".into()).to_string(), "disk full");
        assert_eq!(UiError::Other(anyhow::anyhow!("disk full")).to_string(), "disk full");
        assert_eq!(
            UiError::Rpc { code: 14, message: "unavailable".into() }.to_string(),
            "RPC error 14: unavailable"
        );
    }
}
