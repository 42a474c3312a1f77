//! Profile settings page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits a local draft seeded from the signed-in user and submits it through
//! `Session::update_profile` as one multipart request. Avatar removal is a
//! separate call that is only offered when an avatar exists.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_unavailable::SessionUnavailable;
use crate::net::api::ProfileUpdate;
use crate::net::types::{Preferences, User};
use crate::session::Session;
use crate::util::auth::install_unauth_redirect;

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD", "INR", "JPY"];
pub const THEMES: &[&str] = &["light", "dark", "system"];

/// Editable copy of the profile fields. Reminder days stay raw text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub currency: String,
    pub reminder_days: String,
    pub theme: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.display_name.clone(),
            currency: user.preferences.currency.clone(),
            reminder_days: user.preferences.reminder_lead_days.to_string(),
            theme: user.preferences.theme.clone(),
        }
    }

    /// Convert to the request payload. Unparseable reminder days keep `current`.
    pub fn into_update(self, current: &Preferences) -> ProfileUpdate {
        let days = parse_reminder_days(&self.reminder_days).unwrap_or(current.reminder_lead_days);
        ProfileUpdate::new(self.name, self.currency, days, self.theme)
    }
}

/// Whether the form must be re-seeded (draft and picked avatar file) because
/// the stored user differs from the one it was last seeded for.
pub fn needs_reseed(seeded_for: Option<&User>, current: Option<&User>) -> bool {
    seeded_for != current
}

/// Non-negative whole number of days, surrounding whitespace ignored.
pub fn parse_reminder_days(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Up to two initials for the avatar placeholder.
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Options for a select, keeping an unknown current value selectable.
pub fn select_options(known: &[&str], current: &str) -> Vec<String> {
    let mut options: Vec<String> = known.iter().map(|s| (*s).to_owned()).collect();
    if !current.is_empty() && !known.contains(&current) {
        options.push(current.to_owned());
    }
    options
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    match Session::from_context() {
        Ok(session) => view! { <ProfileForm session=session /> }.into_any(),
        Err(error) => view! { <SessionUnavailable error=error /> }.into_any(),
    }
}

#[component]
fn ProfileForm(session: Session) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let snapshot = session.snapshot();
    let draft = RwSignal::new(ProfileDraft::default());
    let seeded_for = RwSignal::new(None::<User>);
    let avatar_input = NodeRef::<html::Input>::new();

    // Re-seed whenever the stored user changes (first load, successful save).
    Effect::new(move || {
        let user = snapshot.with(|s| s.user.clone());
        if seeded_for.with_untracked(|seeded| needs_reseed(seeded.as_ref(), user.as_ref())) {
            if let Some(user) = &user {
                draft.set(ProfileDraft::from_user(user));
            }
            #[cfg(feature = "hydrate")]
            if let Some(input) = avatar_input.get_untracked() {
                input.set_value("");
            }
            seeded_for.set(user);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(prefs) = snapshot.with_untracked(|s| s.user.as_ref().map(|u| u.preferences.clone())) else {
            return;
        };
        let update = draft.get_untracked().into_update(&prefs);
        #[cfg(feature = "hydrate")]
        let update = update.with_avatar(
            avatar_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0)),
        );
        session.update_profile(update);
    };

    let loading = move || snapshot.with(|s| s.loading);
    let avatar = move || snapshot.with(|s| s.user.as_ref().and_then(|u| u.avatar.clone()));

    view! {
        <div class="profile-page">
            <a href="/" class="profile-page__back">
                "Back"
            </a>
            <h1>"Profile"</h1>
            <div class="profile-page__avatar">
                {move || match avatar() {
                    Some(src) => view! { <img class="avatar" src=src alt="Profile picture" /> }.into_any(),
                    None => {
                        view! {
                            <div class="avatar avatar--placeholder">
                                {move || draft.with(|d| avatar_initials(&d.name))}
                            </div>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || avatar().is_some()>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        disabled=loading
                        on:click=move |_| session.remove_avatar()
                    >
                        "Remove image"
                    </button>
                </Show>
            </div>
            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__field">
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__field">
                    "Currency"
                    <select
                        prop:value=move || draft.with(|d| d.currency.clone())
                        on:change=move |ev| draft.update(|d| d.currency = event_target_value(&ev))
                    >
                        {move || {
                            let current = draft.with(|d| d.currency.clone());
                            select_options(CURRENCIES, &current)
                                .into_iter()
                                .map(|code| {
                                    let selected = code == current;
                                    view! {
                                        <option value=code.clone() selected=selected>
                                            {code.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="profile-form__field">
                    "Reminder days before expiry"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.with(|d| d.reminder_days.clone())
                        on:input=move |ev| draft.update(|d| d.reminder_days = event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__field">
                    "Theme"
                    <select
                        prop:value=move || draft.with(|d| d.theme.clone())
                        on:change=move |ev| draft.update(|d| d.theme = event_target_value(&ev))
                    >
                        {move || {
                            let current = draft.with(|d| d.theme.clone());
                            select_options(THEMES, &current)
                                .into_iter()
                                .map(|theme| {
                                    let selected = theme == current;
                                    view! {
                                        <option value=theme.clone() selected=selected>
                                            {theme.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="profile-form__field">
                    "Avatar"
                    <input type="file" accept="image/*" node_ref=avatar_input />
                </label>
                <button class="btn" type="submit" disabled=loading>
                    {move || if loading() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
