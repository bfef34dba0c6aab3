//! App Header Component
//!
//! Logo, current page title, theme toggle and the session user's menu.

use leptos::prelude::*;
use zuzzbee_core::config::APP_NAME;

use crate::components::ThemeToggle;
use crate::context::{use_app_context, Page};

#[component]
pub fn AppHeader(
    /// Sidebar visibility on narrow screens
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |page: Page| {
        set_menu_open.set(false);
        ctx.navigate(page);
    };

    view! {
        <header class="app-header">
            <button
                type="button"
                class="icon-btn menu-btn"
                aria-label="Toggle navigation"
                on:click=move |_| set_sidebar_open.update(|v| *v = !*v)
            >
                "☰"
            </button>
            <button type="button" class="logo" on:click=move |_| go(Page::Home)>
                <span class="logo-mark">"🐝"</span>
                <span class="logo-text">{APP_NAME}</span>
            </button>
            <span class="page-title">{move || ctx.page.get().title()}</span>

            <div class="header-actions">
                <ThemeToggle />
                {move || ctx.current_user().map(|user| {
                    let avatar = user.avatar_url().to_string();
                    let alt = user.display_label().to_string();
                    let label = alt.clone();
                    view! {
                        <div class="user-menu">
                            <button
                                type="button"
                                class="avatar small"
                                aria-label="Account menu"
                                on:click=move |_| set_menu_open.update(|v| *v = !*v)
                            >
                                <img src=avatar alt=alt />
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="dropdown">
                                    <p class="dropdown-label">{label.clone()}</p>
                                    <button type="button" on:click=move |_| go(Page::Profile)>"Profile"</button>
                                    <button type="button" on:click=move |_| go(Page::EditProfile)>"Settings"</button>
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            ctx.logout();
                                        }
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                })}
            </div>
        </header>
    }
}
