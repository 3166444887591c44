use crate::models::{Alert, PageName, SettingName};
use crate::services::log_service::StoreLog;
use crate::state::alerts::AlertQueue;
use crate::state::auth::AuthStore;
use crate::state::navigation::NavigationState;
use crate::utils::error::{ErrorKind, UiError};
use crate::utils::i18n::Translate;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::broadcast;

const CHANGE_CAPACITY: usize = 64;

const AUTH_ERROR_TITLE: &str = "stores.ui_store.auth_error_title";
const AUTH_ERROR_MSG: &str = "stores.ui_store.auth_error_msg";

/// A mutation of the UI store, published to subscribers after it is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiChange {
    PageChanged(PageName),
    SettingChanged(SettingName),
    ProcessingSwapsToggled(bool),
    AlertAdded(u64),
    AlertCleared(u64),
}

/// Presentation state for the application: current page, settings
/// sub-section, the Processing Swaps toggle and the alert toasts.
///
/// All operations are synchronous and infallible. Errors raised elsewhere in
/// the application are funnelled through [`UiStore::handle_error`].
pub struct UiStore {
    navigation: NavigationState,
    alerts: AlertQueue,

    log: Arc<dyn StoreLog>,
    auth: Arc<AuthStore>,
    translator: Arc<dyn Translate>,

    changes: broadcast::Sender<UiChange>,
}

impl UiStore {
    pub fn new(
        log: Arc<dyn StoreLog>,
        auth: Arc<AuthStore>,
        translator: Arc<dyn Translate>,
    ) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self {
            navigation: NavigationState::new(),
            alerts: AlertQueue::new(),
            log,
            auth,
            translator,
            changes,
        }
    }

    /// Receive every change applied after this call
    pub fn subscribe(&self) -> broadcast::Receiver<UiChange> {
        self.changes.subscribe()
    }

    fn publish(&self, change: UiChange) {
        // No subscribers is fine
        let _ = self.changes.send(change);
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn page(&self) -> PageName {
        self.navigation.page()
    }

    pub fn selected_setting(&self) -> SettingName {
        self.navigation.selected_setting()
    }

    pub fn processing_swaps_visible(&self) -> bool {
        self.navigation.processing_swaps_visible()
    }

    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn alert_queue(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    /// Change to the Auth page
    pub fn go_to_auth(&mut self) {
        self.navigation.go_to_auth();
        self.log.info("Go to the Auth page", &[]);
        self.publish(UiChange::PageChanged(PageName::Auth));
    }

    /// Change to the Loop page
    pub fn go_to_loop(&mut self) {
        self.navigation.go_to_loop();
        self.log.info("Go to the Loop page", &[]);
        self.publish(UiChange::PageChanged(PageName::Loop));
    }

    /// Change to the History page
    pub fn go_to_history(&mut self) {
        self.navigation.go_to_history();
        self.log.info("Go to the History page", &[]);
        self.publish(UiChange::PageChanged(PageName::History));
    }

    /// Change to the Settings page, starting on the General section
    pub fn go_to_settings(&mut self) {
        self.navigation.go_to_settings();
        self.log.info("Go to the Settings page", &[]);
        self.publish(UiChange::PageChanged(PageName::Settings));
        self.publish(UiChange::SettingChanged(SettingName::General));
    }

    /// Toggle displaying of the Processing Swaps section
    pub fn toggle_processing_swaps(&mut self) {
        let visible = self.navigation.toggle_processing_swaps();
        self.publish(UiChange::ProcessingSwapsToggled(visible));
    }

    /// Set the selected setting to display
    pub fn show_settings(&mut self, name: SettingName) {
        self.navigation.show_settings(name);
        self.log.info("Switch to Setting screen", &[json!(name)]);
        self.publish(UiChange::SettingChanged(name));
    }

    /// Add an error alert and return its id
    pub fn notify(&mut self, message: impl Into<String>, title: Option<&str>) -> u64 {
        let id = self.alerts.push(message, title.map(str::to_string));
        self.log.info("Added alert", &[self.alerts.to_json()]);
        if let Some(alert) = self.alerts.get(id) {
            self.log.error(&alert.format());
        }
        self.publish(UiChange::AlertAdded(id));
        id
    }

    /// Remove an existing alert; unknown ids are a no-op
    pub fn clear_alert(&mut self, id: u64) {
        let removed = self.alerts.remove(id);
        self.log.info("Cleared alert", &[json!(id), self.alerts.to_json()]);
        if removed.is_some() {
            self.publish(UiChange::AlertCleared(id));
        }
    }

    /// Show an error to the user. Authentication failures also sign the user
    /// out, which sends them back to the Auth page; `title` is ignored for those.
    pub fn handle_error(&mut self, error: &UiError, title: Option<&str>) {
        match error.kind() {
            ErrorKind::Authentication => {
                self.auth.set_authenticated(false);
                let message = self.translator.translate(AUTH_ERROR_MSG);
                let title = self.translator.translate(AUTH_ERROR_TITLE);
                self.notify(message, Some(title.as_str()));
            }
            ErrorKind::Generic => {
                self.notify(error.to_string(), title);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertKind, LogLevel};
    use crate::services::log_service::LogService;
    use std::collections::HashMap;

    struct FixedTranslator(HashMap<&'static str, &'static str>);

    impl Translate for FixedTranslator {
        fn translate(&self, key: &str) -> String {
            self.0.get(key).copied().unwrap_or(key).to_string()
        }
    }

    fn create_test_store() -> (UiStore, Arc<LogService>, Arc<AuthStore>) {
        let log = Arc::new(LogService::new(100));
        let auth = Arc::new(AuthStore::new(true));
        let translator = FixedTranslator(HashMap::from([
            (AUTH_ERROR_TITLE, "Session expired"),
            (AUTH_ERROR_MSG, "Log in again"),
        ]));
        let store = UiStore::new(log.clone(), auth.clone(), Arc::new(translator));
        (store, log, auth)
    }

    #[test]
    fn test_navigation_logs() {
        let (mut store, log, _auth) = create_test_store();
        store.go_to_loop();
        store.go_to_settings();
        store.show_settings(SettingName::Unit);

        let messages: Vec<_> = log.records().into_iter().map(|r| r.message).collect();
        assert_eq!(
            messages,
            ["Go to the Loop page", "Go to the Settings page", "Switch to Setting screen"]
        );
        assert_eq!(log.records()[2].details, vec![json!("unit")]);
    }

    #[test]
    fn test_toggle_does_not_log() {
        let (mut store, log, _auth) = create_test_store();
        store.toggle_processing_swaps();
        assert!(store.processing_swaps_visible());
        assert!(log.is_empty());
    }

    #[test]
    fn test_notify_logs_queue_and_error() {
        let (mut store, log, _auth) = create_test_store();
        let id = store.notify("disk full", Some("Oops"));

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "Added alert");
        assert_eq!(records[0].details, vec![store.alert_queue().to_json()]);
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(records[1].message, "[Oops] disk full");

        let alert = store.alert_queue().get(id).unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
    }

    #[test]
    fn test_clear_alert_logs_id() {
        let (mut store, log, _auth) = create_test_store();
        let id = store.notify("disk full", None);
        log.clear();

        store.clear_alert(id);
        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "Cleared alert");
        assert_eq!(records[0].details, vec![json!(id), json!({})]);
    }

    #[test]
    fn test_handle_auth_error_uses_translations() {
        let (mut store, _log, auth) = create_test_store();
        store.handle_error(&UiError::authentication("macaroon expired"), Some("ignored"));

        assert!(!auth.is_authenticated());
        let alerts: Vec<_> = store.alerts().collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Log in again");
        assert_eq!(alerts[0].title.as_deref(), Some("Session expired"));
    }

    #[test]
    fn test_handle_generic_error() {
        let (mut store, _log, auth) = create_test_store();
        store.handle_error(&UiError::Network("disk full".into()), None);

        assert!(auth.is_authenticated());
        let alert = store.alerts().next().unwrap();
        assert_eq!(alert.message, "disk full");
        assert!(alert.title.is_none());
    }

    #[test]
    fn test_changes_are_published_in_order() {
        let (mut store, _log, _auth) = create_test_store();
        let mut rx = store.subscribe();

        store.go_to_settings();
        store.toggle_processing_swaps();
        let id = store.notify("boom", None);
        store.clear_alert(id);
        store.clear_alert(id);

        assert_eq!(rx.try_recv().unwrap(), UiChange::PageChanged(PageName::Settings));
        assert_eq!(rx.try_recv().unwrap(), UiChange::SettingChanged(SettingName::General));
        assert_eq!(rx.try_recv().unwrap(), UiChange::ProcessingSwapsToggled(true));
        assert_eq!(rx.try_recv().unwrap(), UiChange::AlertAdded(id));
        assert_eq!(rx.try_recv().unwrap(), UiChange::AlertCleared(id));
        assert!(rx.try_recv().is_err());
    }
}
