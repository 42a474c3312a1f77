//! Client-level configuration and wiring errors.
//!
//! Request failures live in [`crate::net::error::ApiError`]; this enum covers
//! problems detected while assembling the application itself.

/// Errors raised while building the client's configuration or context tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A page or component looked up the session outside of its provider.
    #[error("session context missing: render inside the App root")]
    MissingSessionProvider,

    /// A build-time configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
