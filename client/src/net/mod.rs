//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth/profile calls, `error` describes how they fail,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
