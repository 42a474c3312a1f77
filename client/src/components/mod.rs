//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session or their data explicitly as props and
//! keep their own logic in pure helpers next to the view.

pub mod session_unavailable;
pub mod toast_stack;
pub mod warranty_detail_modal;
