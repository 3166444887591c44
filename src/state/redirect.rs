use crate::models::PageName;
use crate::state::auth::AuthStore;
use crate::state::ui_store::UiStore;
use tokio::sync::watch;

/// Keeps the current page in line with the authentication flag.
///
/// Losing authentication sends the user to the Auth page; gaining it while on
/// the Auth page moves them to the Loop page.
pub struct AuthRedirect {
    authenticated: watch::Receiver<bool>,
}

impl AuthRedirect {
    pub fn new(auth: &AuthStore) -> Self {
        Self {
            authenticated: auth.subscribe(),
        }
    }

    /// Apply any pending auth change to `store`. Returns true if the page changed.
    pub fn apply(&mut self, store: &mut UiStore) -> bool {
        if !self.authenticated.has_changed().unwrap_or(false) {
            return false;
        }
        let authenticated = *self.authenticated.borrow_and_update();

        match (authenticated, store.page()) {
            (false, page) if page != PageName::Auth => {
                tracing::info!("Authentication lost on the {} page", page);
                store.go_to_auth();
                true
            }
            (true, PageName::Auth) => {
                store.go_to_loop();
                true
            }
            _ => false,
        }
    }
}
