//! App Sidebar Component
//!
//! Primary navigation.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const NAV_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Home, "🏠", "Home"),
    (Page::UploadPhoto, "⬆", "Upload Photo"),
    (Page::AddStory, "🖼", "Add Stories"),
    (Page::Campaigns, "🎗", "Campaigns"),
    (Page::Profile, "👤", "Profile"),
    (Page::EditProfile, "⚙", "Settings"),
];

#[component]
pub fn AppSidebar(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class=move || if open.get() { "app-sidebar open" } else { "app-sidebar" }>
            {NAV_ITEMS.iter().map(|&(page, icon, label)| view! {
                <button
                    type="button"
                    class=move || if ctx.page.get() == page { "nav-item active" } else { "nav-item" }
                    on:click=move |_| {
                        set_open.set(false);
                        ctx.navigate(page);
                    }
                >
                    <span class="nav-icon">{icon}</span>
                    <span>{label}</span>
                </button>
            }).collect_view()}
        </nav>
    }
}
