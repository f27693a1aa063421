//! Browser bindings for the BRAYAM SAC attendance session lifecycle
//!
//! Pairs the platform-neutral machinery from `brayam-core` with the
//! browser: a `localStorage` session store, a storage-event logout
//! channel, the lifecycle hooks, and the [`SessionProvider`] context that
//! wires them all up for a Yew application.

pub mod auth;
pub mod config;
pub mod hooks;
pub mod security;
pub mod services;
pub mod session;

pub use auth::context::{use_logout, use_session, use_usuario, SessionContext, SessionProvider};
pub use config::AuthConfig;
pub use session::{BrowserSessionStore, StorageLogoutChannel};

/// Route tracing output to the browser console.
///
/// Call once from the application entry point before rendering.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // std::time is unavailable on wasm32
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
