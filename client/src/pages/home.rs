//! Authenticated landing page.
//!
//! Shows who is signed in and their saved preferences. Visitors without a
//! session are sent to `/login` once startup validation has finished.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_unavailable::SessionUnavailable;
use crate::net::types::{Preferences, User};
use crate::session::Session;
use crate::util::auth::install_unauth_redirect;

/// Greeting line using the first word of the display name.
pub fn greeting(user: &User) -> String {
    match user.display_name.split_whitespace().next() {
        Some(first) => format!("Welcome back, {first}"),
        None => "Welcome back".to_owned(),
    }
}

/// Label/value rows describing `prefs`.
pub fn preference_rows(prefs: &Preferences) -> Vec<(&'static str, String)> {
    let days = match prefs.reminder_lead_days {
        0 => "On the expiry date".to_owned(),
        1 => "1 day before expiry".to_owned(),
        n => format!("{n} days before expiry"),
    };
    vec![("Currency", prefs.currency.clone()), ("Reminders", days), ("Theme", capitalize(&prefs.theme))]
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    match Session::from_context() {
        Ok(session) => view! { <HomeView session=session /> }.into_any(),
        Err(error) => view! { <SessionUnavailable error=error /> }.into_any(),
    }
}

#[component]
fn HomeView(session: Session) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());
    let snapshot = session.snapshot();

    view! {
        <div class="home-page">
            {move || match snapshot.with(|s| s.user.clone()) {
                None => view! { <p class="home-page__loading">"Loading..."</p> }.into_any(),
                Some(user) => {
                    view! {
                        <header class="home-page__header">
                            <h1>{greeting(&user)}</h1>
                            <p class="home-page__email">{user.email.clone()}</p>
                        </header>
                        <dl class="home-page__prefs">
                            {preference_rows(&user.preferences)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                        <div class="home-page__actions">
                            <a href="/profile" class="btn">
                                "Edit profile"
                            </a>
                            <button type="button" class="btn btn--ghost" on:click=move |_| session.logout()>
                                "Log out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
