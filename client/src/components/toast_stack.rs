//! Corner stack of transient session notices.

use leptos::prelude::*;

use crate::session::Session;

/// Renders live notices; clicking one dismisses it early.
#[component]
pub fn ToastStack(session: Session) -> impl IntoView {
    let notices = session.notices();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                let:notice
            >
                {
                    let id = notice.id.clone();
                    view! {
                        <div
                            class=format!("toast {}", notice.kind.css_modifier())
                            on:click=move |_| session.dismiss_notice(&id)
                        >
                            {notice.message.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
