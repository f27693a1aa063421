//! Session lifecycle hooks

pub mod use_auto_logout;
pub mod use_cross_tab_logout;
pub mod use_session_validator;

pub use use_auto_logout::use_auto_logout;
pub use use_cross_tab_logout::use_cross_tab_logout;
pub use use_session_validator::use_session_validator;
