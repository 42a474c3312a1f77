//! Fallback shown when the app root could not set up the session.

use leptos::prelude::*;

use crate::error::ClientError;

/// Explains a wiring or configuration failure instead of panicking mid-render.
#[component]
pub fn SessionUnavailable(error: ClientError) -> impl IntoView {
    log::error!("session unavailable: {error}");

    view! {
        <div class="session-unavailable" role="alert">
            <h1>"SmartSpend is unavailable"</h1>
            <p>{error.to_string()}</p>
        </div>
    }
}
