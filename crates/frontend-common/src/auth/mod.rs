//! Session context and orchestration

pub mod context;

pub use context::{
    use_logout, use_session, use_usuario, SessionAction, SessionContext, SessionContextData,
    SessionProvider,
};
