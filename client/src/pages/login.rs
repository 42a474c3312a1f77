//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A thin form over `Session::login` and `Session::register`. Field rules are
//! the browser's native constraints; every failure message comes from the
//! session's normalized error.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_unavailable::SessionUnavailable;
use crate::session::Session;
use crate::util::auth::install_authed_redirect;

/// Native `minlength` applied to the password field.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Which of the two forms is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Sign Up",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Sign in to SmartSpend",
            Self::Register => "Create your SmartSpend account",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Welcome back! Track your warranties and spending.",
            Self::Register => "Start tracking your warranties and spending.",
        }
    }

    /// Submit button text; the loading variant is shown while a call is in flight.
    pub fn submit_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (Self::Login, true) => "Signing in...",
            (Self::Register, true) => "Creating account...",
            (Self::Login, false) => "Sign In",
            (Self::Register, false) => "Get Started",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// What a submit dispatches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

/// Build the submission for `tab`. The name is ignored on the login tab.
pub fn submission(tab: AuthTab, name: String, email: String, password: String) -> Submission {
    match tab {
        AuthTab::Login => Submission::Login { email, password },
        AuthTab::Register => Submission::Register { name, email, password },
    }
}

pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

pub fn password_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}

/// Login page. Signed-in visitors are sent home.
#[component]
pub fn LoginPage() -> impl IntoView {
    match Session::from_context() {
        Ok(session) => view! { <AuthForm session=session /> }.into_any(),
        Err(error) => view! { <SessionUnavailable error=error /> }.into_any(),
    }
}

#[component]
fn AuthForm(session: Session) -> impl IntoView {
    install_authed_redirect(session, use_navigate());

    let snapshot = session.snapshot();
    let tab = RwSignal::new(AuthTab::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = move || snapshot.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submission(tab.get_untracked(), name.get_untracked(), email.get_untracked(), password.get_untracked()) {
            Submission::Login { email, password } => session.login(email, password),
            Submission::Register { name, email, password } => session.register(name, email, password),
        }
    };

    let tab_button = move |target: AuthTab| {
        view! {
            <button
                type="button"
                class="auth-tabs__tab"
                class:auth-tabs__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {target.tab_label()}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="auth-tabs">{tab_button(AuthTab::Login)} {tab_button(AuthTab::Register)}</div>
                <h1>{move || tab.get().heading()}</h1>
                <p class="login-card__subtitle">{move || tab.get().subheading()}</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || tab.get() == AuthTab::Register>
                        <label class="login-label">
                            "Full name"
                            <input
                                class="login-input"
                                type="text"
                                required
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <div class="password-field">
                            <input
                                class="login-input"
                                type=move || password_input_type(show_password.get())
                                required
                                minlength=MIN_PASSWORD_LEN.to_string()
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                aria-label=move || password_toggle_label(show_password.get())
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || password_toggle_label(show_password.get())}
                            </button>
                        </div>
                    </label>
                    <Show when=move || snapshot.with(|s| s.error.is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || snapshot.with(|s| s.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=loading>
                        {move || tab.get().submit_label(loading())}
                    </button>
                </form>
                <p class="login-card__switch">
                    <button
                        type="button"
                        class="login-card__switch-link"
                        on:click=move |_| tab.update(|t| *t = t.other())
                    >
                        {move || match tab.get() {
                            AuthTab::Login => "New to SmartSpend? Create an account",
                            AuthTab::Register => "Already have an account? Sign in",
                        }}
                    </button>
                </p>
            </div>
        </div>
    }
}
