use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "info,swap_ui_store=debug";

/// Initialize logging for the application, honouring `RUST_LOG`
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    install(filter);
    tracing::debug!("Logging initialized");
}

/// Initialize logging with an explicit level for everything but this crate
pub fn init_with_level(level: &str) {
    install(level_filter(level));
    tracing::info!("Logging initialized with level: {}", level);
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{},swap_ui_store=debug", level))
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();
}
