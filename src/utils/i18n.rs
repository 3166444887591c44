use std::sync::OnceLock;

static CURRENT_LANGUAGE: OnceLock<String> = OnceLock::new();

/// Initialize and set the language, preferring an explicit choice over the environment
pub fn set_language(preferred: Option<&str>) {
    let system = std::env::var("LANG").ok();
    let lang = resolve_language(preferred, system.as_deref());

    CURRENT_LANGUAGE.set(lang.clone()).ok();
    rust_i18n::set_locale(&lang);

    tracing::info!("Language set to: {}", lang);
}

/// Get current language
pub fn current_language() -> String {
    CURRENT_LANGUAGE
        .get()
        .cloned()
        .unwrap_or_else(|| rust_i18n::locale().to_string())
}

/// Pick the UI language: explicit choice, then the system locale, then English
pub fn resolve_language(preferred: Option<&str>, system: Option<&str>) -> String {
    let given = |lang: &&str| !lang.trim().is_empty();
    preferred
        .filter(given)
        .or(system.filter(given))
        .map(normalize_language)
        .unwrap_or_else(|| "en".to_string())
}

/// Map a locale string such as "zh_CN.UTF-8" onto a supported language code
fn normalize_language(lang: &str) -> String {
    if lang.starts_with("zh") || lang.contains("zh_CN") || lang.contains("zh_Hans") {
        "zh-CN".to_string()
    } else {
        "en".to_string()
    }
}

/// Get available languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    vec![("zh-CN", "简体中文"), ("en", "English")]
}

/// Looks up display strings by message key
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Translator backed by the bundled `locales/` files
#[derive(Debug, Clone, Default)]
pub struct I18nTranslator {
    /// Fixed locale; `None` follows the process-wide locale
    locale: Option<String>,
}

impl I18nTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }
}

impl Translate for I18nTranslator {
    fn translate(&self, key: &str) -> String {
        match &self.locale {
            Some(locale) => rust_i18n::t!(key, locale = locale.as_str()).into_owned(),
            None => rust_i18n::t!(key).into_owned(),
        }
    }
}
