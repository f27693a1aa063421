//! Injectable session store
//!
//! The browser keeps the token and the user display fields in
//! origin-scoped persistent storage shared by every tab. The trait here
//! abstracts that storage so hooks can be exercised against an in-memory
//! fake, and so non-browser hosts can supply their own backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{SessionError, SessionResult};
use crate::token;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the display name
pub const USER_NAME_KEY: &str = "nombre";
/// Storage key holding the display role
pub const USER_ROLE_KEY: &str = "rol";

/// Presentational user fields cached alongside the token
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserDisplay {
    pub nombre: String,
    pub rol: String,
}

/// Session store contract
///
/// All operations are infallible reads or locally-handled writes: storage
/// faults surface as [`SessionError::Storage`], never as a panic.
pub trait SessionStore {
    /// Persist a token. Rejects values without the 3-segment shape with
    /// [`SessionError::MalformedToken`]; the previously stored value is
    /// left untouched on rejection.
    fn set_token(&self, token: &str) -> SessionResult<()>;

    /// The persisted token, or `None` when unset or blank
    fn token(&self) -> Option<String>;

    /// Remove the token and the cached display fields. Idempotent:
    /// clearing an empty store succeeds.
    fn clear(&self) -> SessionResult<()>;

    /// Cache the display fields
    fn set_user(&self, user: &UserDisplay) -> SessionResult<()>;

    /// The cached display fields, or `None` when either is missing
    fn user(&self) -> Option<UserDisplay>;

    /// Headers for an authenticated request: empty without a token, else
    /// a single bearer `Authorization` entry
    fn auth_headers(&self) -> HashMap<String, String> {
        match self.token() {
            Some(token) => HashMap::from([("Authorization".to_string(), token::bearer_value(&token))]),
            None => HashMap::new(),
        }
    }
}

/// In-memory [`SessionStore`] for tests and non-browser hosts.
///
/// Clones share the same underlying map, mirroring how every handle to
/// browser storage observes the same origin-scoped state.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_token(&self, token: &str) -> SessionResult<()> {
        if !token::is_well_formed(token) {
            return Err(SessionError::malformed_token(
                "expected a 3-segment dot-delimited value",
            ));
        }
        self.entries
            .borrow_mut()
            .insert(TOKEN_KEY.to_string(), token.to_string());
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.entries
            .borrow()
            .get(TOKEN_KEY)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    fn clear(&self) -> SessionResult<()> {
        let mut entries = self.entries.borrow_mut();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_NAME_KEY);
        entries.remove(USER_ROLE_KEY);
        Ok(())
    }

    fn set_user(&self, user: &UserDisplay) -> SessionResult<()> {
        let mut entries = self.entries.borrow_mut();
        entries.insert(USER_NAME_KEY.to_string(), user.nombre.clone());
        entries.insert(USER_ROLE_KEY.to_string(), user.rol.clone());
        Ok(())
    }

    fn user(&self) -> Option<UserDisplay> {
        let entries = self.entries.borrow();
        let nombre = entries.get(USER_NAME_KEY)?.clone();
        let rol = entries.get(USER_ROLE_KEY)?.clone();
        Some(UserDisplay { nombre, rol })
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub SessionStore {}

        impl SessionStore for SessionStore {
            fn set_token(&self, token: &str) -> SessionResult<()>;
            fn token(&self) -> Option<String>;
            fn clear(&self) -> SessionResult<()>;
            fn set_user(&self, user: &UserDisplay) -> SessionResult<()>;
            fn user(&self) -> Option<UserDisplay>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_token_round_trips() {
        let store = MemorySessionStore::new();
        store.set_token("a.b.c").unwrap();
        assert_eq!(store.token().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn malformed_token_is_rejected_and_previous_value_kept() {
        let store = MemorySessionStore::new();
        store.set_token("a.b.c").unwrap();

        for bad in ["", "   ", "a.b", "a.b.c.d", "plain"] {
            let err = store.set_token(bad).unwrap_err();
            assert!(matches!(err, SessionError::MalformedToken { .. }));
            assert_eq!(store.token().as_deref(), Some("a.b.c"));
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.set_token("a.b.c").unwrap();
        store
            .set_user(&UserDisplay {
                nombre: "Ana".into(),
                rol: "Coordinador".into(),
            })
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);

        // Clearing again must also succeed
        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn auth_headers_carry_bearer_token_only_when_present() {
        let store = MemorySessionStore::new();
        assert!(store.auth_headers().is_empty());

        store.set_token("a.b.c").unwrap();
        let headers = store.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer a.b.c"));
    }

    #[test]
    fn clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set_token("a.b.c").unwrap();
        assert_eq!(other.token().as_deref(), Some("a.b.c"));
    }
}
