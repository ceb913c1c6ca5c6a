//! Identity: who the remote store acts for
//!
//! - `Session`: the signed-in user and bearer token
//! - `SessionManager`: persisted session, sign-in and sign-out
//! - `AuthClient`: the backend's password auth endpoints

pub mod client;
pub mod manager;
pub mod secret;
pub mod session;

pub use client::AuthClient;
pub use manager::SessionManager;
pub use secret::SecretString;
pub use session::Session;
