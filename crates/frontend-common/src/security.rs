//! Browser-side security helpers

use brayam_core::TOKEN_KEY;

/// Keys that must never survive a session teardown, in either storage area
const SENSITIVE_KEYS: [&str; 4] = [TOKEN_KEY, "password", "secret", "auth"];

/// Whether the page runs in a context where handling credentials is
/// acceptable: HTTPS, or a local development host.
pub fn is_secure_context() -> bool {
    let location = gloo::utils::window().location();
    let protocol = location.protocol().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    is_secure_origin(&protocol, &hostname)
}

fn is_secure_origin(protocol: &str, hostname: &str) -> bool {
    protocol == "https:" || hostname == "localhost" || hostname == "127.0.0.1"
}

/// Remove credential material from both storage areas.
///
/// Coarser than [`SessionStore::clear`](brayam_core::SessionStore::clear):
/// used as a safety sweep rather than a logout path.
pub fn clear_sensitive_data() {
    let window = gloo::utils::window();
    let storages = [
        window.local_storage().ok().flatten(),
        window.session_storage().ok().flatten(),
    ];

    for storage in storages.into_iter().flatten() {
        for key in SENSITIVE_KEYS {
            if let Err(err) = storage.remove_item(key) {
                tracing::warn!(key, error = ?err, "failed to remove sensitive key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_origins_are_secure() {
        assert!(is_secure_origin("https:", "asistencia.brayamsac.com"));
    }

    #[test]
    fn local_development_hosts_are_secure_over_http() {
        assert!(is_secure_origin("http:", "localhost"));
        assert!(is_secure_origin("http:", "127.0.0.1"));
    }

    #[test]
    fn plain_http_on_a_remote_host_is_not() {
        assert!(!is_secure_origin("http:", "asistencia.brayamsac.com"));
        assert!(!is_secure_origin("", ""));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn sensitive_keys_are_swept_from_both_storage_areas() {
        let window = gloo::utils::window();
        let local = window.local_storage().unwrap().unwrap();
        let session = window.session_storage().unwrap().unwrap();
        local.set_item(TOKEN_KEY, "a.b.c").unwrap();
        session.set_item("secret", "hunter2").unwrap();

        clear_sensitive_data();

        assert_eq!(local.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.get_item("secret").unwrap(), None);
    }
}
