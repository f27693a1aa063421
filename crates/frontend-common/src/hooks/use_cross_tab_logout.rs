//! Logout propagation from other tabs

use brayam_core::{LogoutChannel, SessionStore};
use yew::prelude::*;

use crate::services::session::redirect_to_login;
use crate::session::{BrowserSessionStore, StorageLogoutChannel};

/// Clear this tab's session and redirect whenever another tab logs out.
///
/// Clearing an already-cleared store and redirecting an already-redirected
/// tab are both no-ops, so signals need no deduplication.
#[hook]
pub fn use_cross_tab_logout() {
    use_effect_with((), move |_| {
        let subscription = StorageLogoutChannel::new().subscribe(Box::new(move |_signal| {
            let store = BrowserSessionStore::new();
            if let Err(err) = store.clear() {
                tracing::warn!(%err, "failed to clear session after cross-tab logout");
            }
            redirect_to_login();
        }));

        move || drop(subscription)
    });
}
