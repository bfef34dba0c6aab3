//! Story Reel Component
//!
//! Horizontal row of story avatars in collection order. Renders nothing at
//! all when there are no stories.

use leptos::prelude::*;
use zuzzbee_core::reel::{reel_entries, ReelEntry};

use crate::components::StoryAvatar;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StoryReel(
    /// Receives the id of the clicked story
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let entries = Memo::new(move |_| store.stories().with(|stories| reel_entries(stories)));

    view! {
        <Show when=move || entries.with(|e| !e.is_empty())>
            <div class="story-reel">
                <For
                    each=move || entries.get()
                    key=|entry: &ReelEntry| (entry.story_id.clone(), entry.ring)
                    children=move |entry| view! { <StoryAvatar entry=entry on_select=on_select /> }
                />
            </div>
        </Show>
    }
}
