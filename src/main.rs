// Load i18n translations
rust_i18n::i18n!("locales", fallback = "en");

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;
use swap_ui_store::services::config_service::{ConfigService, UiSettings};
use swap_ui_store::services::log_service::LogService;
use swap_ui_store::state::{AuthRedirect, AuthStore, UiStore};
use swap_ui_store::utils::i18n::{self, I18nTranslator};
use swap_ui_store::utils::logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    match cli.log_level.as_deref() {
        Some(level) => logger::init_with_level(level),
        None => logger::init(),
    }

    let config = ConfigService::new()?;

    let (settings, load_error) = match config.load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (UiSettings::default(), Some(e)),
    };

    i18n::set_language(cli.lang.as_deref().or(settings.language.as_deref()));
    tracing::info!("Current language: {}", i18n::current_language());

    let log = Arc::new(LogService::new(settings.log_capacity));
    if let Some(e) = load_error {
        log.warn(&format!("Ignoring saved settings: {}", e));
    }

    let auth = Arc::new(AuthStore::default());
    let mut redirect = AuthRedirect::new(&auth);
    let mut store = UiStore::new(log.clone(), auth, Arc::new(I18nTranslator::new()));
    if settings.show_processing_swaps {
        store.toggle_processing_swaps();
    }

    match cli.command {
        Some(Commands::Demo) => cli::run_demo(&mut store, &mut redirect, &log),
        Some(Commands::Languages) => {
            for (code, name) in i18n::available_languages() {
                println!("{} - {}", code, name);
            }
        }
        Some(Commands::Config { language, log_capacity, show_processing_swaps }) => {
            let mut updated = settings.clone();
            if let Some(language) = language {
                updated.language = Some(language);
            }
            if let Some(log_capacity) = log_capacity {
                updated.log_capacity = log_capacity;
            }
            if let Some(show) = show_processing_swaps {
                updated.show_processing_swaps = show;
            }
            if updated != settings {
                config.save_settings(&updated)?;
            }
            print!("{}", toml::to_string_pretty(&updated)?);
        }
        Some(Commands::Interactive) | None => cli::run_interactive(&mut store, &mut redirect)?,
    }

    Ok(())
}
