use tokio::sync::watch;

/// Authentication state shared between the UI store and whoever validates credentials.
///
/// The flag lives in a watch channel so a redirect policy can react to changes.
#[derive(Debug)]
pub struct AuthStore {
    authenticated: watch::Sender<bool>,
}

impl AuthStore {
    pub fn new(authenticated: bool) -> Self {
        let (authenticated, _) = watch::channel(authenticated);
        Self { authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// Publishes the value even when it is unchanged
    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.send_replace(authenticated);
        tracing::debug!("Authenticated set to {}", authenticated);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new(false)
    }
}
