//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pulls the session from context, installs its route guard, and
//! delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod profile;
