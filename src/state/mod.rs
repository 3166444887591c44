// State management module
pub mod alerts;
pub mod auth;
pub mod navigation;
pub mod redirect;
pub mod ui_store;

pub use alerts::AlertQueue;
pub use auth::AuthStore;
pub use navigation::NavigationState;
pub use redirect::AuthRedirect;
pub use ui_store::{UiChange, UiStore};
