//! Home Feed Component
//!
//! Story reel on top, photo cards below. Owns the story viewer and acts as
//! the coordinator between reel clicks and the viewer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::StoryViewer;

use crate::commands;
use crate::components::{PhotoCard, StoryReel, StoryViewerDialog};
use crate::context::{use_app_context, Page};
use crate::store::{store_mark_story_seen, use_app_store, AppStateStoreFields};

#[component]
pub fn HomeFeed() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let viewer = RwSignal::new(StoryViewer::new());

    let open_story = move |story_id: String| {
        let stories = store.stories().get_untracked();
        let mut opened = false;
        viewer.update(|v| opened = v.open_by_id(&stories, &story_id));
        if !opened {
            return;
        }

        store_mark_story_seen(&store, &story_id);
        let services = ctx.services();
        spawn_local(async move {
            if let Err(e) = commands::mark_story_seen(&services, &story_id).await {
                log::warn!("[FEED] failed to mark story {} seen: {}", story_id, e);
            }
        });
    };

    let photo_ids = move || {
        store.photos().with(|photos| photos.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
    };

    view! {
        <section class="home-feed">
            <StoryReel on_select=open_story />
            <StoryViewerDialog viewer=viewer />

            <Show
                when=move || store.photos().with(|p| !p.is_empty())
                fallback=move || view! {
                    <div class="empty-feed">
                        <p>"No photos yet."</p>
                        <button type="button" on:click=move |_| ctx.navigate(Page::UploadPhoto)>
                            "Upload your first photo"
                        </button>
                    </div>
                }
            >
                <div class="photo-feed">
                    <For
                        each=photo_ids
                        key=|id: &String| id.clone()
                        children=move |id| view! { <PhotoCard photo_id=id /> }
                    />
                </div>
            </Show>
        </section>
    }
}
