//! Browser-backed implementations of the core session abstractions

pub mod broadcast;
pub mod store;

pub use broadcast::StorageLogoutChannel;
pub use store::BrowserSessionStore;
