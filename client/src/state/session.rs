//! Session snapshot and the transitions that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every login/register/profile operation ends in one of the reducers below.
//! Reducers only touch the snapshot and return the side effects the caller
//! must carry out (storage, navigation, notices). `crate::session::Session`
//! executes those effects against the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failed calls are folded into `error` through [`normalize_error`]; nothing
//! is propagated to the renderer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::notice::NoticeKind;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

/// Fixed message for any 5xx answer.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Remote operations the session can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOp {
    Login,
    Register,
    UpdateProfile,
    RemoveAvatar,
}

impl SessionOp {
    /// Fallback message for failures outside the 4xx/5xx tiers.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::UpdateProfile => "Failed to update profile",
            Self::RemoveAvatar => "Failed to remove profile image",
        }
    }

    /// Default for a 4xx answer without a body message. Avatar removal has
    /// no rejection tier and falls through to [`Self::fallback_message`].
    pub fn rejected_message(self) -> Option<&'static str> {
        match self {
            Self::Login => Some("Invalid email or password"),
            Self::Register => Some("Invalid registration data"),
            Self::UpdateProfile => Some("Invalid profile data"),
            Self::RemoveAvatar => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Logged in successfully",
            Self::Register => "Account created successfully",
            Self::UpdateProfile => "Profile updated successfully",
            Self::RemoveAvatar => "Profile image removed successfully",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::UpdateProfile => "update_profile",
            Self::RemoveAvatar => "remove_avatar",
        }
    }
}

/// User-facing message for a failed `op`.
///
/// 4xx prefers the body message over the operation's rejection default,
/// 5xx is always [`SERVER_ERROR_MESSAGE`], anything else prefers the body
/// message over the operation's fallback.
pub fn normalize_error(op: SessionOp, err: &ApiError) -> String {
    if err.is_client_error() {
        if let Some(default) = op.rejected_message() {
            return err.body_message().unwrap_or(default).to_owned();
        }
    }
    if err.is_server_error() {
        return SERVER_ERROR_MESSAGE.to_owned();
    }
    err.body_message().unwrap_or(op.fallback_message()).to_owned()
}

/// Side effects requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    PersistCredential(String),
    ClearCredential,
    Navigate(&'static str),
    Notify(NoticeKind, String),
}

/// Current authentication state. Mutated only through the methods below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub credential: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Startup snapshot. Loading stays set until the seeded credential has
    /// been validated, or until [`Self::finish_unseeded`] when there is none.
    pub fn seeded(credential: Option<String>) -> Self {
        Self { credential: credential.filter(|c| !c.is_empty()), loading: true, ..Self::default() }
    }

    /// Credential that still needs a `/api/auth/me` round trip.
    pub fn pending_validation(&self) -> Option<&str> {
        match (&self.credential, &self.user) {
            (Some(credential), None) => Some(credential),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.credential.is_some()
    }

    /// Close the startup phase when storage held no credential.
    pub fn finish_unseeded(&mut self) {
        if self.credential.is_none() {
            self.loading = false;
        }
    }

    /// Apply the result of validating `validated`. Rejection is a silent
    /// logout. Results for a credential that has since been replaced are
    /// dropped.
    pub fn apply_validation(&mut self, validated: &str, result: Result<User, ApiError>) -> Vec<SessionEffect> {
        if self.credential.as_deref() != Some(validated) {
            return Vec::new();
        }
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                Vec::new()
            }
            Err(_) => {
                self.credential = None;
                self.user = None;
                vec![SessionEffect::ClearCredential]
            }
        }
    }

    /// Enter the in-flight phase of any remote operation.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Finish a login or register call.
    pub fn apply_auth(&mut self, op: SessionOp, result: Result<AuthResponse, ApiError>) -> Vec<SessionEffect> {
        self.loading = false;
        match result {
            Ok(AuthResponse { token, user }) => {
                self.credential = Some(token.clone());
                self.user = Some(user);
                self.error = None;
                vec![
                    SessionEffect::PersistCredential(token),
                    SessionEffect::Navigate(HOME_ROUTE),
                    SessionEffect::Notify(NoticeKind::Success, op.success_message().to_owned()),
                ]
            }
            Err(err) => self.fail(op, &err),
        }
    }

    /// Finish a profile update or avatar removal. The returned user replaces
    /// the current one wholesale.
    pub fn apply_profile(&mut self, op: SessionOp, result: Result<User, ApiError>) -> Vec<SessionEffect> {
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                vec![SessionEffect::Notify(NoticeKind::Success, op.success_message().to_owned())]
            }
            Err(err) => self.fail(op, &err),
        }
    }

    /// Drop the session. Cannot fail; repeating it changes nothing further.
    pub fn logout(&mut self) -> Vec<SessionEffect> {
        self.credential = None;
        self.user = None;
        self.loading = false;
        vec![
            SessionEffect::ClearCredential,
            SessionEffect::Navigate(LOGIN_ROUTE),
            SessionEffect::Notify(NoticeKind::Success, LOGOUT_MESSAGE.to_owned()),
        ]
    }

    fn fail(&mut self, op: SessionOp, err: &ApiError) -> Vec<SessionEffect> {
        let message = normalize_error(op, err);
        log::warn!("{} failed: {err}", op.name());
        self.error = Some(message.clone());
        vec![SessionEffect::Notify(NoticeKind::Error, message)]
    }
}
