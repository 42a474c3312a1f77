//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated pages bounce visitors to `/login` once startup validation
//! has finished; the login page bounces signed-in users home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::Session;
use crate::state::session::{HOME_ROUTE, LOGIN_ROUTE, SessionState};

/// Pending validation is not "logged out": wait for loading to clear.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn should_redirect_authed(state: &SessionState) -> bool {
    state.is_authenticated()
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever the session has settled without a user.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let snapshot = session.snapshot();
    Effect::new(move || {
        if should_redirect_unauth(&snapshot.get()) {
            navigate(LOGIN_ROUTE, replace());
        }
    });
}

/// Redirect to `/` whenever a user is signed in.
pub fn install_authed_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let snapshot = session.snapshot();
    Effect::new(move || {
        if should_redirect_authed(&snapshot.get()) {
            navigate(HOME_ROUTE, replace());
        }
    });
}
