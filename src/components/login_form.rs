//! Login Form Component
//!
//! Mock login against the single demo account.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::settings::authenticate;

use crate::context::{use_app_context, Page};

/// Pause that stands in for a network round trip
pub(crate) const MOCK_AUTH_DELAY_MS: u32 = 600;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            TimeoutFuture::new(MOCK_AUTH_DELAY_MS).await;
            match authenticate(&email, &password) {
                Ok(patch) => ctx.login(patch),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Welcome back"</h2>
            <label>
                "Email"
                <input
                    type="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    required
                    placeholder="••••••••"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Logging in..." } else { "Log In" }}
            </button>
            <p class="muted center">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::Signup)>"Sign up"</button>
            </p>
        </form>
    }
}
