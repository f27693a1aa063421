//! API base URL configuration
//!
//! The base URL is fixed at build time: `BRAYAM_API_URL` when set in the
//! build environment, otherwise the production backend. It is resolved
//! once and never mutated at runtime.

use once_cell::sync::Lazy;

/// Production backend, used when no override is configured
pub const DEFAULT_API_BASE_URL: &str = "https://brayamsac-backend.onrender.com";

static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    let configured = option_env!("BRAYAM_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
    configured.trim_end_matches('/').to_string()
});

/// The configured base URL, without a trailing slash
pub fn api_base_url() -> &'static str {
    &API_BASE_URL
}

/// Whether an API URL is acceptable for this build.
///
/// Release builds additionally require HTTPS and refuse raw IPv4 hosts.
pub fn is_valid_api_url(raw: &str) -> bool {
    check_api_url(raw, !cfg!(debug_assertions))
}

/// Validate the configured base URL; call once at startup
pub fn validate_environment() -> bool {
    is_valid_api_url(api_base_url())
}

fn check_api_url(raw: &str, production: bool) -> bool {
    let parsed = match url::Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(url = raw, %err, "invalid API URL");
            return false;
        }
    };

    if production && parsed.scheme() != "https" {
        tracing::warn!(url = raw, "insecure API URL in production build");
        return false;
    }

    if production && parsed.host_str().is_some_and(is_ipv4_literal) {
        tracing::warn!(url = raw, "raw IP address in production build");
        return false;
    }

    true
}

fn is_ipv4_literal(host: &str) -> bool {
    let mut segments = 0;
    for segment in host.split('.') {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments == 4
}
