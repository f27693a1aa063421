//! Session liveness state machine
//!
//! Liveness is never materialized: it is re-derived on every poll tick as
//! the logical AND of "token present" and "last validation succeeded".
//! The decision logic lives here, platform-free, so the scheduling layer
//! only has to wire it to a timer, an HTTP client, and navigation.

use crate::store::SessionStore;

/// Fixed validation poll interval in milliseconds
pub const VALIDATION_INTERVAL_MS: u32 = 30_000;

/// Observed session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No validation result observed yet
    Unknown,
    /// The last validation call succeeded
    Valid,
    /// The session was rejected or the token disappeared; terminal for
    /// this cycle, a logout/redirect follows
    Invalid,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

/// What a poll tick should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPlan {
    /// No token: go straight to the login route, no network call
    RedirectToLogin,
    /// Token present: ask the backend whether it is still accepted
    Validate,
}

/// Result of a validation round-trip, as seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// 2xx response
    Accepted,
    /// Non-success status (expired or revoked token)
    Rejected,
    /// The request itself failed; treated the same as a rejection
    TransportError,
}

/// Action to take after a validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Session still live, nothing observable until the next tick
    Continue,
    /// Best-effort server logout, clear local state, redirect to login
    Logout,
}

/// Per-instance poll state: `Unknown -> Valid -> Invalid`
#[derive(Debug, Clone, Default)]
pub struct Liveness {
    status: SessionStatus,
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Decide what a tick does based on token presence
    pub fn on_tick(&mut self, token_present: bool) -> TickPlan {
        if token_present {
            TickPlan::Validate
        } else {
            self.status = SessionStatus::Invalid;
            TickPlan::RedirectToLogin
        }
    }

    /// Record a validation outcome and decide the follow-up action
    pub fn on_validation(&mut self, outcome: ValidationOutcome) -> TickAction {
        match outcome {
            ValidationOutcome::Accepted => {
                self.status = SessionStatus::Valid;
                TickAction::Continue
            }
            ValidationOutcome::Rejected | ValidationOutcome::TransportError => {
                self.status = SessionStatus::Invalid;
                TickAction::Logout
            }
        }
    }
}

/// Record a validation outcome and apply its local side effect.
///
/// On a rejection the store is cleared immediately; a failed clear is
/// logged but does not stop the logout (the caller still redirects).
pub fn settle<S: SessionStore + ?Sized>(
    liveness: &mut Liveness,
    store: &S,
    outcome: ValidationOutcome,
) -> TickAction {
    let action = liveness.on_validation(outcome);
    if matches!(action, TickAction::Logout) {
        if let Err(err) = store.clear() {
            tracing::warn!(%err, "failed to clear session store during forced logout");
        }
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockSessionStore;
    use crate::store::MemorySessionStore;

    #[test]
    fn absent_token_redirects_without_validation() {
        let mut liveness = Liveness::new();
        assert_eq!(liveness.on_tick(false), TickPlan::RedirectToLogin);
        assert_eq!(liveness.status(), SessionStatus::Invalid);
    }

    #[test]
    fn present_token_is_validated() {
        let mut liveness = Liveness::new();
        assert_eq!(liveness.on_tick(true), TickPlan::Validate);
        assert_eq!(liveness.status(), SessionStatus::Unknown);
    }

    #[test]
    fn accepted_validation_keeps_session_alive() {
        let mut liveness = Liveness::new();
        let mut store = MockSessionStore::new();
        store.expect_clear().never();

        let action = settle(&mut liveness, &store, ValidationOutcome::Accepted);
        assert_eq!(action, TickAction::Continue);
        assert_eq!(liveness.status(), SessionStatus::Valid);
    }

    #[test]
    fn rejected_validation_clears_store_and_logs_out() {
        let mut liveness = Liveness::new();
        let mut store = MockSessionStore::new();
        store.expect_clear().times(1).returning(|| Ok(()));

        let action = settle(&mut liveness, &store, ValidationOutcome::Rejected);
        assert_eq!(action, TickAction::Logout);
        assert_eq!(liveness.status(), SessionStatus::Invalid);
    }

    #[test]
    fn transport_error_is_treated_as_rejection() {
        let mut liveness = Liveness::new();
        let store = MemorySessionStore::new();
        store.set_token("a.b.c").unwrap();

        let action = settle(&mut liveness, &store, ValidationOutcome::TransportError);
        assert_eq!(action, TickAction::Logout);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn session_can_recover_only_before_invalidation() {
        // Unknown -> Valid on acceptance, Valid -> Invalid on rejection
        let mut liveness = Liveness::new();
        liveness.on_validation(ValidationOutcome::Accepted);
        assert_eq!(liveness.status(), SessionStatus::Valid);
        liveness.on_validation(ValidationOutcome::Rejected);
        assert_eq!(liveness.status(), SessionStatus::Invalid);
    }
}
