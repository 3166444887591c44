// Navigation state: which page is shown and which Settings sub-section is selected.
// There is no generic page setter; each page has its own transition so page-specific
// side effects live in one place.

use crate::models::{PageName, SettingName};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// The current page being displayed
    page: PageName,
    /// The selected setting on the Settings page
    selected_setting: SettingName,
    /// Whether the Processing Swaps section is displayed on the Loop page
    processing_swaps_visible: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> PageName {
        self.page
    }

    pub fn selected_setting(&self) -> SettingName {
        self.selected_setting
    }

    pub fn processing_swaps_visible(&self) -> bool {
        self.processing_swaps_visible
    }

    pub fn go_to_auth(&mut self) {
        self.page = PageName::Auth;
    }

    pub fn go_to_loop(&mut self) {
        self.page = PageName::Loop;
    }

    pub fn go_to_history(&mut self) {
        self.page = PageName::History;
    }

    /// Entering Settings always starts on the General section.
    pub fn go_to_settings(&mut self) {
        self.page = PageName::Settings;
        self.selected_setting = SettingName::General;
    }

    /// Returns the new visibility.
    pub fn toggle_processing_swaps(&mut self) -> bool {
        self.processing_swaps_visible = !self.processing_swaps_visible;
        self.processing_swaps_visible
    }

    /// Not gated on the current page; the selection only shows once Settings is active.
    pub fn show_settings(&mut self, name: SettingName) {
        self.selected_setting = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let nav = NavigationState::new();
        assert_eq!(nav.page(), PageName::Auth);
        assert_eq!(nav.selected_setting(), SettingName::General);
        assert!(!nav.processing_swaps_visible());
    }

    #[test]
    fn test_go_to_settings_resets_selection() {
        let mut nav = NavigationState::new();
        nav.go_to_settings();
        nav.show_settings(SettingName::Balance);
        nav.go_to_loop();
        assert_eq!(nav.selected_setting(), SettingName::Balance);

        nav.go_to_settings();
        assert_eq!(nav.page(), PageName::Settings);
        assert_eq!(nav.selected_setting(), SettingName::General);
    }

    #[test]
    fn test_show_settings_on_other_page() {
        let mut nav = NavigationState::new();
        nav.go_to_history();
        nav.show_settings(SettingName::Unit);

        assert_eq!(nav.page(), PageName::History);
        assert_eq!(nav.selected_setting(), SettingName::Unit);
    }

    #[test]
    fn test_toggle_is_independent_of_page() {
        let mut nav = NavigationState::new();
        assert!(nav.toggle_processing_swaps());
        nav.go_to_history();
        nav.go_to_auth();
        assert!(nav.processing_swaps_visible());
        assert!(!nav.toggle_processing_swaps());
    }
}
