//! Toaster Component
//!
//! Stack of transient notices. Each one dismisses itself after a timeout
//! or on click.

use leptos::prelude::*;

use crate::context::{use_app_context, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.notice.kind.css_class() on:click=move |_| ctx.dismiss(id)>
                            <p class="notice-title">{toast.notice.title}</p>
                            {toast.notice.description.map(|d| view! { <p class="notice-description">{d}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
