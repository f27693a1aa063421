//! Cross-tab logout over storage-change events
//!
//! Publishing writes an epoch-millisecond timestamp to a dedicated
//! `localStorage` key. The browser fires a `storage` event for that write
//! in every *other* tab of the origin, which is exactly the fan-out the
//! logout broadcast needs; the publishing tab has already cleared its own
//! state before publishing.

use brayam_core::{LogoutChannel, LogoutSignal, SessionError, SessionResult, SignalHandler, Subscription};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use crate::config::AuthConfig;

/// [`LogoutChannel`] over `localStorage` plus window `storage` events
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageLogoutChannel;

impl StorageLogoutChannel {
    pub fn new() -> Self {
        Self
    }
}

/// Stored representation of a signal: the stringified timestamp
pub(crate) fn format_signal(signal: LogoutSignal) -> String {
    signal.at_ms.to_string()
}

/// Parse a stored signal value. Accepts fractional timestamps since other
/// writers may store a raw `Date.now()`.
pub(crate) fn parse_signal(raw: &str) -> Option<LogoutSignal> {
    let ms = raw.trim().parse::<f64>().ok()?;
    if !ms.is_finite() {
        return None;
    }
    Some(LogoutSignal::new(ms as i64))
}

/// Interpret a storage mutation as seen by the `storage` listener.
///
/// Any change to the logout key is a signal: a removal or an unreadable
/// value must still log the observing tab out, so those are stamped with
/// `fallback_ms` instead of being dropped.
pub(crate) fn signal_for_change(
    key: Option<&str>,
    new_value: Option<&str>,
    fallback_ms: i64,
) -> Option<LogoutSignal> {
    if key != Some(AuthConfig::LOGOUT_EVENT_KEY) {
        return None;
    }
    Some(
        new_value
            .and_then(parse_signal)
            .unwrap_or(LogoutSignal::new(fallback_ms)),
    )
}

impl LogoutChannel for StorageLogoutChannel {
    fn publish(&self, signal: LogoutSignal) -> SessionResult<()> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| SessionError::storage("localStorage is not available"))?;

        storage
            .set_item(AuthConfig::LOGOUT_EVENT_KEY, &format_signal(signal))
            .map_err(|err| {
                tracing::warn!(error = ?err, "failed to publish logout signal");
                SessionError::storage(format!("{err:?}"))
            })
    }

    fn subscribe(&self, handler: SignalHandler) -> Subscription {
        let listener = EventListener::new(&gloo::utils::window(), "storage", move |event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            let Some(signal) = signal_for_change(
                event.key().as_deref(),
                event.new_value().as_deref(),
                js_sys::Date::now() as i64,
            ) else {
                return;
            };
            tracing::debug!(at_ms = signal.at_ms, "observed logout from another tab");
            handler(signal);
        });

        Subscription::new(move || drop(listener))
    }
}
