//! Frontend configuration

/// Session lifecycle configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Validation poll interval in milliseconds
    pub const VALIDATE_INTERVAL_MS: u32 = brayam_core::VALIDATION_INTERVAL_MS;

    /// Route every logged-out tab lands on
    pub const LOGIN_ROUTE: &'static str = "/loginSistema";

    /// Shared storage key carrying the cross-tab logout signal
    pub const LOGOUT_EVENT_KEY: &'static str = "logout-event";

    /// How long the logout confirmation stays visible before the
    /// originating tab navigates to the login route
    pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_500;
}
