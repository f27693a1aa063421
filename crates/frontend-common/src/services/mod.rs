//! Session services shared by hooks and components

pub mod session;

pub use session::{fetch_usuario, logout_current_session, redirect_to_login};
