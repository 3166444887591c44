use crate::utils::error::UiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    #[default]
    Auth,
    Loop,
    History,
    Settings,
}

/// Sub-sections of the Settings page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingName {
    #[default]
    General,
    Unit,
    Balance,
}

impl PageName {
    pub const ALL: [PageName; 4] = [Self::Auth, Self::Loop, Self::History, Self::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Loop => "loop",
            Self::History => "history",
            Self::Settings => "settings",
        }
    }

    /// Translation key for the page label
    pub fn label_key(&self) -> String {
        format!("pages.{}", self.as_str())
    }
}

impl SettingName {
    pub const ALL: [SettingName; 3] = [Self::General, Self::Unit, Self::Balance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Unit => "unit",
            Self::Balance => "balance",
        }
    }

    /// Translation key for the setting label
    pub fn label_key(&self) -> String {
        format!("settings.{}", self.as_str())
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UiError::InvalidName(s.to_string()))
    }
}

impl FromStr for SettingName {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UiError::InvalidName(s.to_string()))
    }
}
