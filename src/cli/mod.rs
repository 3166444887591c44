pub mod commands;

pub use commands::{Cli, Commands};

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_i18n::t;
use swap_ui_store::models::{PageName, SettingName};
use swap_ui_store::services::log_service::LogService;
use swap_ui_store::state::{AuthRedirect, UiStore};
use swap_ui_store::utils::error::UiError;

/// Print the visible state: page, page-specific details and any toasts
pub fn render(store: &UiStore) {
    let page = store.page();
    let page_key = page.label_key();
    println!(
        "{}: {}",
        t!("cli.current_page"),
        style(t!(page_key.as_str())).bold().cyan()
    );

    match page {
        PageName::Settings => {
            let setting_key = store.selected_setting().label_key();
            println!("  {}: {}", t!("cli.current_setting"), t!(setting_key.as_str()));
        }
        PageName::Loop => println!(
            "  {}: {}",
            t!("cli.processing_swaps"),
            store.processing_swaps_visible()
        ),
        PageName::Auth | PageName::History => {}
    }

    if store.alert_queue().is_empty() {
        println!("  {}", style(t!("cli.no_alerts")).dim());
    }
    for alert in store.alerts() {
        match &alert.title {
            Some(title) => println!("  {} {}", style(format!("[{}]", title)).red().bold(), alert.message),
            None => println!("  {}", style(&alert.message).red()),
        }
    }
}

/// Scripted tour of every store operation
pub fn run_demo(store: &mut UiStore, redirect: &mut AuthRedirect, log: &LogService) {
    store.auth().set_authenticated(true);
    redirect.apply(store);
    render(store);

    if !store.processing_swaps_visible() {
        store.toggle_processing_swaps();
    }
    render(store);

    store.go_to_settings();
    store.show_settings(SettingName::Unit);
    render(store);

    store.go_to_history();
    render(store);

    store.handle_error(&UiError::Network("disk full".to_string()), Some("Oops"));
    render(store);

    let ids: Vec<u64> = store.alerts().map(|alert| alert.id).collect();
    for id in ids {
        store.clear_alert(id);
    }

    store.handle_error(&UiError::authentication("macaroon expired"), Some("Oops"));
    if redirect.apply(store) {
        println!("{}", style(t!("cli.redirected")).yellow());
    }
    render(store);

    println!();
    for record in log.records() {
        println!("{}", style(record.format()).dim());
    }
}

enum Action {
    Page(PageName),
    ToggleProcessingSwaps,
    ShowSetting,
    AddAlert,
    ClearAlert,
    RaiseError,
    RaiseAuthError,
    LogIn,
    Quit,
}

impl Action {
    fn all() -> Vec<Action> {
        let mut actions: Vec<Action> = PageName::ALL.into_iter().map(Action::Page).collect();
        actions.extend([
            Action::ToggleProcessingSwaps,
            Action::ShowSetting,
            Action::AddAlert,
            Action::ClearAlert,
            Action::RaiseError,
            Action::RaiseAuthError,
            Action::LogIn,
            Action::Quit,
        ]);
        actions
    }

    fn label(&self) -> String {
        match self {
            Self::Page(page) => {
                let key = page.label_key();
                format!("→ {}", t!(key.as_str()))
            }
            Self::ToggleProcessingSwaps => t!("cli.toggle_processing_swaps").to_string(),
            Self::ShowSetting => t!("cli.show_setting").to_string(),
            Self::AddAlert => t!("cli.add_alert").to_string(),
            Self::ClearAlert => t!("cli.clear_alert").to_string(),
            Self::RaiseError => t!("cli.raise_error").to_string(),
            Self::RaiseAuthError => t!("cli.raise_auth_error").to_string(),
            Self::LogIn => t!("cli.login").to_string(),
            Self::Quit => t!("cli.quit").to_string(),
        }
    }
}

/// Menu-driven loop over the store operations
pub fn run_interactive(store: &mut UiStore, redirect: &mut AuthRedirect) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let actions = Action::all();
    let labels: Vec<String> = actions.iter().map(Action::label).collect();

    loop {
        render(store);

        let choice = Select::with_theme(&theme)
            .with_prompt(t!("cli.choose_action").to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match &actions[choice] {
            Action::Page(PageName::Auth) => store.go_to_auth(),
            Action::Page(PageName::Loop) => store.go_to_loop(),
            Action::Page(PageName::History) => store.go_to_history(),
            Action::Page(PageName::Settings) => store.go_to_settings(),
            Action::ToggleProcessingSwaps => store.toggle_processing_swaps(),
            Action::ShowSetting => {
                let names: Vec<String> = SettingName::ALL
                    .iter()
                    .map(|name| {
                        let key = name.label_key();
                        t!(key.as_str()).to_string()
                    })
                    .collect();
                let index = Select::with_theme(&theme)
                    .with_prompt(t!("cli.current_setting").to_string())
                    .items(&names)
                    .default(store.selected_setting() as usize)
                    .interact()?;
                store.show_settings(SettingName::ALL[index]);
            }
            Action::AddAlert => {
                let message: String = Input::with_theme(&theme)
                    .with_prompt(t!("cli.alert_message").to_string())
                    .interact_text()?;
                let title: String = Input::with_theme(&theme)
                    .with_prompt(t!("cli.alert_title").to_string())
                    .allow_empty(true)
                    .interact_text()?;
                let title = Some(title.trim()).filter(|s| !s.is_empty());
                store.notify(message, title);
            }
            Action::ClearAlert => {
                let alerts: Vec<(u64, String)> = store
                    .alerts()
                    .map(|alert| (alert.id, alert.format()))
                    .collect();
                if alerts.is_empty() {
                    continue;
                }
                let labels: Vec<&str> = alerts.iter().map(|(_, label)| label.as_str()).collect();
                let index = Select::with_theme(&theme)
                    .with_prompt(t!("cli.alert_to_clear").to_string())
                    .items(&labels)
                    .interact()?;
                store.clear_alert(alerts[index].0);
            }
            Action::RaiseError => {
                let message: String = Input::with_theme(&theme)
                    .with_prompt(t!("cli.error_message").to_string())
                    .interact_text()?;
                store.handle_error(&UiError::Network(message), None);
            }
            Action::RaiseAuthError => {
                store.handle_error(&UiError::authentication("credentials rejected"), None);
            }
            Action::LogIn => store.auth().set_authenticated(true),
            Action::Quit => break,
        }

        if redirect.apply(store) {
            println!("{}", style(t!("cli.redirected")).yellow());
        }
    }

    Ok(())
}
