//! Story Avatar Component
//!
//! One round avatar in the reel. The ring shows whether the story was seen.

use leptos::prelude::*;
use zuzzbee_core::reel::ReelEntry;

#[component]
pub fn StoryAvatar(
    entry: ReelEntry,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ReelEntry { story_id, label, initial, preview_url, ring } = entry;
    let alt = format!("{}'s story", label);
    let title = label.clone();

    view! {
        <button
            type="button"
            class="story-avatar"
            title=title
            on:click=move |_| on_select.run(story_id.clone())
        >
            <span class=ring.css_class()>
                <span class="story-initial">{initial}</span>
                <img src=preview_url alt=alt />
            </span>
            <span class="story-label">{label}</span>
        </button>
    }
}
