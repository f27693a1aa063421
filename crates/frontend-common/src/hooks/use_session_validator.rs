//! Periodic token validation

use std::cell::RefCell;
use std::rc::Rc;

use brayam_core::{Liveness, SessionStore};
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AuthConfig;
use crate::services::session::run_validation_tick;
use crate::session::BrowserSessionStore;

/// Poll the backend every 30 seconds while mounted and force a logout as
/// soon as the session stops being accepted.
///
/// The interval is cancelled on unmount, so no polling outlives the
/// consuming UI. A validation call that outlasts the interval may overlap
/// with the next tick; both ticks converge to the same logged-out state.
#[hook]
pub fn use_session_validator() {
    use_effect_with((), move |_| {
        let liveness = Rc::new(RefCell::new(Liveness::new()));

        let interval = Interval::new(AuthConfig::VALIDATE_INTERVAL_MS, move || {
            let liveness = liveness.clone();
            spawn_local(async move {
                let store: Rc<dyn SessionStore> = Rc::new(BrowserSessionStore::new());
                run_validation_tick(liveness, store).await;
            });
        });

        move || drop(interval)
    });
}
