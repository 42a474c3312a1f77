//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;

use crate::components::session_unavailable::SessionUnavailable;
use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
use crate::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session from the compiled-in configuration, provides it to
/// every page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(error) => return view! { <SessionUnavailable error=error/> }.into_any(),
    };
    let session = Session::provide(&config);

    view! {
        <Title text="SmartSpend"/>

        <Router>
            <SessionRedirects session=session/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
        <ToastStack session=session/>
    }
    .into_any()
}

/// Performs navigations requested by session operations. Lives inside the
/// router so `use_navigate` is available.
#[component]
fn SessionRedirects(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let redirect = session.redirect();
    Effect::new(move || {
        if let Some(route) = redirect.get() {
            session.clear_redirect();
            navigate(route, NavigateOptions::default());
        }
    });
}
