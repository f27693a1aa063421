//! Brayam core session types and utilities
//!
//! Platform-neutral half of the session-lifecycle mechanism: the token
//! shape rules, the injectable session store, the liveness state machine
//! driving the validation poll, and the cross-tab logout channel. Browser
//! bindings live in `brayam-frontend-common`.

pub mod broadcast;
pub mod error;
pub mod session;
pub mod store;
pub mod token;

pub use broadcast::{LogoutChannel, LogoutSignal, MemoryLogoutChannel, SignalHandler, Subscription};
pub use error::{SessionError, SessionResult};
pub use session::{
    settle, Liveness, SessionStatus, TickAction, TickPlan, ValidationOutcome,
    VALIDATION_INTERVAL_MS,
};
pub use store::{MemorySessionStore, SessionStore, UserDisplay, TOKEN_KEY, USER_NAME_KEY, USER_ROLE_KEY};
