//! `localStorage`-backed session store
//!
//! All handles observe the same origin-scoped storage, which outlives a
//! single page view and is shared across tabs. Every storage access is
//! wrapped: a disabled or failing storage reports
//! [`SessionError::Storage`] instead of propagating a JS exception.

use brayam_core::{
    token, SessionError, SessionResult, SessionStore, UserDisplay, TOKEN_KEY, USER_NAME_KEY,
    USER_ROLE_KEY,
};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session store over the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> SessionResult<Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::storage("localStorage is not available"))
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn read_key(storage: &Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %describe(err), "failed to read from localStorage");
            None
        }
    }
}

fn remove_key(storage: &Storage, key: &str) -> SessionResult<()> {
    storage.remove_item(key).map_err(|err| {
        tracing::warn!(key, error = %describe(err.clone()), "failed to remove from localStorage");
        SessionError::storage(describe(err))
    })
}

fn write_key(storage: &Storage, key: &str, value: &str) -> SessionResult<()> {
    storage.set_item(key, value).map_err(|err| {
        tracing::warn!(key, error = %describe(err.clone()), "failed to write to localStorage");
        SessionError::storage(describe(err))
    })
}

impl SessionStore for BrowserSessionStore {
    fn set_token(&self, token_value: &str) -> SessionResult<()> {
        if !token::is_well_formed(token_value) {
            tracing::warn!("rejected token without the expected 3-segment shape");
            return Err(SessionError::malformed_token(
                "expected a 3-segment dot-delimited value",
            ));
        }
        write_key(&local_storage()?, TOKEN_KEY, token_value)
    }

    fn token(&self) -> Option<String> {
        let storage = local_storage().ok()?;
        read_key(&storage, TOKEN_KEY).filter(|value| !value.trim().is_empty())
    }

    fn clear(&self) -> SessionResult<()> {
        let storage = local_storage()?;
        // Keep removing on partial failure; clearing must stay idempotent
        let results = [
            remove_key(&storage, TOKEN_KEY),
            remove_key(&storage, USER_NAME_KEY),
            remove_key(&storage, USER_ROLE_KEY),
        ];
        results.into_iter().collect()
    }

    fn set_user(&self, user: &UserDisplay) -> SessionResult<()> {
        let storage = local_storage()?;
        write_key(&storage, USER_NAME_KEY, &user.nombre)?;
        write_key(&storage, USER_ROLE_KEY, &user.rol)
    }

    fn user(&self) -> Option<UserDisplay> {
        let storage = local_storage().ok()?;
        let nombre = read_key(&storage, USER_NAME_KEY)?;
        let rol = read_key(&storage, USER_ROLE_KEY)?;
        Some(UserDisplay { nombre, rol })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_local_storage() {
        let store = BrowserSessionStore::new();
        store.clear().unwrap();

        store.set_token("a.b.c").unwrap();
        assert_eq!(store.token().as_deref(), Some("a.b.c"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
        // Second clear must also succeed
        store.clear().unwrap();
    }

    #[wasm_bindgen_test]
    fn malformed_token_never_reaches_storage() {
        let store = BrowserSessionStore::new();
        store.clear().unwrap();
        store.set_token("a.b.c").unwrap();

        assert!(store.set_token("not-a-token").is_err());
        assert_eq!(store.token().as_deref(), Some("a.b.c"));
    }
}
