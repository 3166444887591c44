pub mod alert;
pub mod log;
pub mod page;

// Re-export main types
pub use alert::{Alert, AlertKind};
pub use log::{LogLevel, LogRecord};
pub use page::{PageName, SettingName};
