//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data (`session`, `notice`) so transitions can be unit
//! tested without a reactive runtime; `crate::session` wraps it in signals.

pub mod notice;
pub mod session;
