//! Theme Toggle Component
//!
//! Flips between light and dark mode.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let is_dark = move || ctx.theme.with(|t| t.mode.is_dark());

    view! {
        <button
            type="button"
            class="icon-btn theme-toggle"
            aria-label="Toggle light/dark theme"
            title="Toggle light/dark theme"
            on:click=move |_| {
                let mode = ctx.toggle_mode();
                log::debug!("[THEME] mode -> {}", mode.as_str());
            }
        >
            {move || if is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
