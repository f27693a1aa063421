//! Session lifecycle flows
//!
//! Three logout paths converge here: the validation poll discovering an
//! ended session, the explicit user-initiated logout, and the best-effort
//! notification fired while the page is being torn down. All of them are
//! lossy towards the backend and strict about local cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use brayam_core::{
    settle, token, Liveness, LogoutChannel, LogoutSignal, SessionStore, TickAction, TickPlan,
    UserDisplay, ValidationOutcome,
};
use brayam_http::types::{BeaconLogoutPayload, Usuario};
use brayam_http::{build_api_url, endpoints, ApiClient, ClientError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::AuthConfig;

/// Navigate the current tab to the login route
pub fn redirect_to_login() {
    let location = gloo::utils::window().location();
    if let Err(err) = location.set_href(AuthConfig::LOGIN_ROUTE) {
        tracing::warn!(error = ?err, "failed to navigate to the login route");
    }
}

/// One tick of the validation poll.
///
/// Absent token: straight to the login route, no network call. Otherwise
/// the token is validated against the backend and a rejection (including
/// transport failure) triggers the full logout path: best-effort server
/// logout, local clear, redirect.
pub async fn run_validation_tick(liveness: Rc<RefCell<Liveness>>, store: Rc<dyn SessionStore>) {
    let token = store.token();
    let plan = liveness.borrow_mut().on_tick(token.is_some());

    let token = match (plan, token) {
        (TickPlan::Validate, Some(token)) => token,
        _ => {
            redirect_to_login();
            return;
        }
    };

    let outcome = validate_with_backend(&token).await;
    if !matches!(outcome, ValidationOutcome::Accepted) {
        notify_backend_logout(&token).await;
    }

    let action = settle(&mut liveness.borrow_mut(), store.as_ref(), outcome);
    if matches!(action, TickAction::Logout) {
        redirect_to_login();
    }
}

/// Load the authenticated user for display and cache the name/role pair
pub async fn fetch_usuario(store: &dyn SessionStore) -> Option<Usuario> {
    let token = store.token()?;
    let client = match ApiClient::with_token(token) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "failed to build API client");
            return None;
        }
    };

    match client.validate().await {
        Ok(response) => {
            let usuario = response.usuario;
            let display = UserDisplay {
                nombre: usuario.nombre.clone(),
                rol: usuario.role_label(),
            };
            if let Err(err) = store.set_user(&display) {
                tracing::warn!(%err, "failed to cache user display fields");
            }
            Some(usuario)
        }
        Err(err) => {
            tracing::debug!(%err, "could not load authenticated user");
            None
        }
    }
}

/// Explicit user-initiated logout.
///
/// Waits for the backend to answer but proceeds with local cleanup either
/// way, then announces the logout to every other tab. Navigation is left
/// to the caller so the UI can show its confirmation first.
pub async fn logout_current_session(store: &dyn SessionStore, channel: &dyn LogoutChannel) {
    if let Some(token) = store.token() {
        notify_backend_logout(&token).await;
    }

    if let Err(err) = store.clear() {
        tracing::warn!(%err, "failed to clear session store on logout");
    }

    let signal = LogoutSignal::new(js_sys::Date::now() as i64);
    if let Err(err) = channel.publish(signal) {
        tracing::warn!(%err, "failed to broadcast logout to other tabs");
    }
}

/// Fire the unload-time logout if a session is active.
///
/// Never blocks page teardown: the primary path is a keepalive `fetch`,
/// and only when that fails is a beacon queued as fallback. All failures
/// are swallowed; there is no retry once the page is gone.
pub fn schedule_unload_logout(store: &dyn SessionStore) {
    let Some(token) = store.token() else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = keepalive_logout(&token).await {
            tracing::debug!(error = ?err, "keepalive logout failed, falling back to beacon");
            if let Err(err) = send_logout_beacon(&token) {
                tracing::error!(error = ?err, "beacon logout failed");
            }
        }
    });
}

async fn validate_with_backend(token: &str) -> ValidationOutcome {
    let client = match ApiClient::with_token(token) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "failed to build API client");
            return ValidationOutcome::TransportError;
        }
    };

    match client.validate().await {
        Ok(_) => ValidationOutcome::Accepted,
        Err(ClientError::Request(err)) => {
            tracing::warn!(%err, "token validation request failed");
            ValidationOutcome::TransportError
        }
        Err(err) => {
            tracing::debug!(%err, "token no longer accepted by the backend");
            ValidationOutcome::Rejected
        }
    }
}

async fn notify_backend_logout(token: &str) {
    let client = match ApiClient::with_token(token) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "failed to build API client");
            return;
        }
    };
    if let Err(err) = client.logout().await {
        tracing::debug!(%err, "server-side logout not confirmed");
    }
}

async fn keepalive_logout(token: &str) -> Result<(), JsValue> {
    let headers = web_sys::Headers::new()?;
    headers.set("Authorization", &token::bearer_value(token))?;
    headers.set("Content-Type", "application/json")?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    // Keep the request alive past page discard. web-sys does not expose a
    // `set_keepalive` binding, so set the dictionary field directly.
    js_sys::Reflect::set(&init, &JsValue::from_str("keepalive"), &JsValue::TRUE)?;

    let url = build_api_url(endpoints::AUTH_LOGOUT);
    let request = web_sys::Request::new_with_str_and_init(&url, &init)?;
    JsFuture::from(gloo::utils::window().fetch_with_request(&request)).await?;
    Ok(())
}

fn send_logout_beacon(token: &str) -> Result<(), JsValue> {
    let payload = serde_json::to_string(&BeaconLogoutPayload::before_unload(token))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&payload));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = build_api_url(endpoints::AUTH_LOGOUT_BEACON);
    let queued = gloo::utils::window()
        .navigator()
        .send_beacon_with_opt_blob(&url, Some(&blob))?;
    if !queued {
        tracing::debug!("user agent declined to queue the logout beacon");
    }
    Ok(())
}
