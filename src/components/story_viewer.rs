//! Story Viewer Component
//!
//! Modal that plays one story slide by slide. All transitions go through
//! `zuzzbee_core::StoryViewer`; this component only draws its state.
//!
//! Closing: the ✕ button, a click on the backdrop, or Escape.

use leptos::ev;
use leptos::prelude::*;
use zuzzbee_core::{Story, StoryViewer};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StoryViewerDialog(viewer: RwSignal<StoryViewer>) -> impl IntoView {
    let store = use_app_store();

    let story = Memo::new(move |_| -> Option<Story> {
        let id = viewer.with(|v| v.story_id().map(str::to_string))?;
        store.stories().with(|stories| stories.iter().find(|s| s.id == id).cloned())
    });

    let close = move || viewer.update(|v| v.close());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && viewer.with_untracked(|v| v.is_open()) {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    let owner_label = move || {
        story.with(|s| {
            s.as_ref()
                .map(|s| s.user.display_label().to_string())
                .unwrap_or_default()
        })
    };

    let current_image = move || {
        let index = viewer.with(|v| v.current_index()).unwrap_or(0);
        story.with(|s| {
            s.as_ref()
                .and_then(|s| s.item(index))
                .map(|item| item.image_url.clone())
        })
    };

    let slide_alt = move || {
        let index = viewer.with(|v| v.current_index()).unwrap_or(0);
        format!("Story by {} - slide {}", owner_label(), index + 1)
    };

    view! {
        <Show when=move || viewer.with(|v| v.is_open())>
            <div class="story-viewer-backdrop" on:click=move |_| close()>
                <div
                    class="story-viewer"
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || format!("Story from {}", owner_label())
                    on:click=|ev| ev.stop_propagation()
                >
                    <Show when=move || viewer.with(|v| v.shows_navigation())>
                        <div class="story-progress">
                            {move || viewer.with(|v| v.segments()).into_iter().map(|fill| view! {
                                <div class="story-progress-track">
                                    <div
                                        class="story-progress-fill"
                                        style:width=format!("{}%", fill.percent())
                                    ></div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Show>

                    <div class="story-owner">
                        {move || story.with(|s| s.as_ref().map(|s| view! {
                            <span class="avatar small">
                                <img src=s.user.avatar_url().to_string() alt=s.user.display_label().to_string() />
                            </span>
                        }))}
                        <span class="story-owner-name">{owner_label}</span>
                    </div>

                    <button
                        type="button"
                        class="story-close"
                        aria-label="Close story"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>

                    {move || current_image().map(|src| view! {
                        <img class="story-slide" src=src alt=slide_alt />
                    })}

                    <Show when=move || viewer.with(|v| v.shows_navigation())>
                        <button
                            type="button"
                            class="story-nav prev"
                            aria-label="Previous story item"
                            on:click=move |_| viewer.update(|v| v.previous())
                        >
                            "‹"
                        </button>
                        <button
                            type="button"
                            class="story-nav next"
                            aria-label="Next story item"
                            on:click=move |_| viewer.update(|v| v.next())
                        >
                            "›"
                        </button>
                    </Show>

                    {move || story.with(|s| s.as_ref().and_then(|s| s.content.clone())).map(|content| view! {
                        <p class="story-caption">{content}</p>
                    })}
                </div>
            </div>
        </Show>
    }
}
