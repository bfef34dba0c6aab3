//! Signup Form Component
//!
//! Mock signup: validates the form and logs straight in.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::config::APP_NAME;
use zuzzbee_core::settings::signup;
use zuzzbee_core::Notice;

use super::login_form::MOCK_AUTH_DELAY_MS;
use crate::context::{use_app_context, Page};

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        let patch = match signup(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(patch) => patch,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(MOCK_AUTH_DELAY_MS).await;
            let name = patch.username.clone().unwrap_or_default();
            ctx.login(patch);
            ctx.notify(Notice::success("Account Created!").with_description(format!(
                "Welcome to {}, {}! You've been logged in.",
                APP_NAME, name
            )));
            set_loading.set(false);
        });
    };

    // Text input bound to a signal pair
    let field = move |label: &'static str, kind: &'static str, placeholder: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    required
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create your account"</h2>
            {field("Username", "text", "yourusername", username, set_username)}
            {field("Email", "email", "you@example.com", email, set_email)}
            {field("Password", "password", "••••••••", password, set_password)}
            {field("Confirm Password", "password", "••••••••", confirm, set_confirm)}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
            </button>
            <p class="muted center">
                "Already have an account? "
                <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::Login)>"Log in"</button>
            </p>
        </form>
    }
}
