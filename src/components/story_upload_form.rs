//! Story Upload Form Component
//!
//! Pick up to ten images, preview and prune them, add an optional caption,
//! then create a story at the front of the reel.
//!
//! Preview object URLs are revoked whenever the selection changes, after a
//! submit, and when the form unmounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::config::MAX_IMAGES_PER_STORY;
use zuzzbee_core::upload::StorySelection;

use crate::commands::{self, create_preview_url, picked_files, revoke_preview_urls, PickedFile};
use crate::context::{use_app_context, Page};
use crate::store::{store_prepend_story, use_app_store};

/// Swap in a new preview list, revoking the old URLs. A no-op once the form
/// has unmounted.
fn replace_previews(previews: RwSignal<Vec<String>>, next: Vec<String>) {
    previews.try_update(|urls| {
        revoke_preview_urls(urls);
        *urls = next;
    });
}

#[component]
pub fn StoryUploadForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // web_sys::File is not Send, so the selection lives in local storage
    let selection = RwSignal::new_local(StorySelection::<PickedFile>::default());
    let previews = RwSignal::new(Vec::<String>::new());
    let (caption, set_caption) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let reset_previews = move |next: Vec<String>| replace_previews(previews, next);

    on_cleanup(move || {
        previews.try_with_untracked(|urls| revoke_preview_urls(urls));
    });

    let on_files = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let (picked, notice) = StorySelection::select(picked_files(&input));
        // Allow picking the same files again
        input.set_value("");

        if let Some(notice) = notice {
            ctx.notify(notice);
        }
        let urls = picked
            .files()
            .iter()
            .map(|f| create_preview_url(f).unwrap_or_default())
            .collect();
        selection.set(picked);
        reset_previews(urls);
    };

    let remove_at = move |index: usize| {
        selection.update(|s| {
            s.remove(index);
        });
        let mut urls = previews.get_untracked();
        if index < urls.len() {
            let removed = urls.remove(index);
            revoke_preview_urls(&[removed]);
            previews.set(urls);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let files = selection.with_untracked(|s| s.files().to_vec());
        let text = caption.get_untracked();
        let user = ctx.current_user();
        let services = ctx.services();

        spawn_local(async move {
            match commands::create_story(&services, user.as_ref(), &files, &text).await {
                Ok(upload) => {
                    store_prepend_story(&store, upload.story.clone());
                    ctx.notify_all(upload.notices());
                    selection.update(|s| s.clear());
                    reset_previews(Vec::new());
                    set_caption.set(String::new());
                    ctx.navigate(Page::Home);
                }
                Err(e) => {
                    log::warn!("[STORY] upload failed: {}", e);
                    ctx.notify_all(e.notices());
                }
            }
            set_submitting.set(false);
        });
    };

    let count_label = move || {
        format!(
            "{} / {} images selected",
            selection.with(|s| s.len()),
            MAX_IMAGES_PER_STORY
        )
    };

    view! {
        <form class="story-upload-form" on:submit=on_submit>
            <h2>"Add to your story"</h2>

            <label class="file-picker">
                <span>"Choose images"</span>
                <input type="file" accept="image/*" multiple on:change=on_files />
            </label>
            <p class="hint">{count_label}</p>

            <div class="preview-grid">
                {move || previews.get().into_iter().enumerate().map(|(index, url)| view! {
                    <div class="preview-tile">
                        <img src=url alt=format!("Selected image {}", index + 1) />
                        <button
                            type="button"
                            class="remove-btn"
                            aria-label="Remove image"
                            on:click=move |_| remove_at(index)
                        >
                            "×"
                        </button>
                    </div>
                }).collect_view()}
            </div>

            <textarea
                placeholder="Say something about your story (optional)"
                prop:value=move || caption.get()
                on:input=move |ev| set_caption.set(event_target_value(&ev))
            ></textarea>

            <button
                type="submit"
                disabled=move || submitting.get() || selection.with(|s| s.is_empty())
            >
                {move || if submitting.get() { "Creating story..." } else { "Share story" }}
            </button>
        </form>
    }
}
