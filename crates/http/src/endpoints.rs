//! Backend endpoint table and URL resolution

use crate::config::api_base_url;

pub const AUTH: &str = "/api/auth";
pub const AUTH_VALIDATE: &str = "/api/auth/validar";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_LOGOUT_BEACON: &str = "/api/auth/logout-beacon";

pub const ASISTENCIAS: &str = "/api/asistencias";
pub const ALMACENES: &str = "/api/almacenes";
pub const SUBALMACENES: &str = "/api/subalmacenes";
pub const TRABAJADORES: &str = "/api/trabajadores";
pub const USUARIOS: &str = "/api/usuarios";
pub const ROTACIONES: &str = "/api/rotaciones";
pub const DASHBOARD: &str = "/api/dashboard";
pub const USUARIO_ALMACENES: &str = "/api/usuario-almacenes";
pub const TRABAJADOR_ASISTENCIA: &str = "/api/trabajadorAsistencia";
pub const NOTIFICATIONS: &str = "/api/notifications/events";

/// Join a logical endpoint path onto a base URL.
///
/// An input that is already absolute (starts with `http`) passes through
/// unchanged, which makes the function idempotent under re-application.
pub fn join_api_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http") {
        return endpoint.to_string();
    }
    format!("{base}{endpoint}")
}

/// Resolve a logical endpoint path against the configured base URL
pub fn build_api_url(endpoint: &str) -> String {
    join_api_url(api_base_url(), endpoint)
}
