//! Best-effort logout when the page goes away

use gloo::events::EventListener;
use yew::prelude::*;

use crate::services::session::schedule_unload_logout;
use crate::session::BrowserSessionStore;

/// Notify the backend when the page is being unloaded.
///
/// `beforeunload` and `unload` are handled identically; whichever fires
/// first wins and the other finds the work already scheduled. Neither
/// path delays teardown and failures are only logged.
#[hook]
pub fn use_auto_logout() {
    use_effect_with((), move |_| {
        let window = gloo::utils::window();

        let before_unload = EventListener::new(&window, "beforeunload", move |_| {
            schedule_unload_logout(&BrowserSessionStore::new());
        });
        let unload = EventListener::new(&window, "unload", move |_| {
            schedule_unload_logout(&BrowserSessionStore::new());
        });

        move || {
            drop(before_unload);
            drop(unload);
        }
    });
}
