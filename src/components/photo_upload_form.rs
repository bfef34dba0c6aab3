//! Photo Upload Form Component
//!
//! Single image, category, filter and caption, with optional AI caption
//! suggestions that can be applied piecemeal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::caption::ready_notice;
use zuzzbee_core::config::{find_filter, CATEGORIES, IMAGE_FILTERS};
use zuzzbee_core::upload::{ImageFile, PhotoDraft};

use crate::commands::{self, picked_files, DelayedCaptionService};
use crate::context::{use_app_context, Page};
use crate::store::{store_prepend_photo, use_app_store};

#[component]
pub fn PhotoUploadForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let draft = RwSignal::new(PhotoDraft::default());
    let (suggesting, set_suggesting) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_file = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = picked_files(&input).into_iter().next() else {
            draft.update(|d| d.clear_image());
            return;
        };
        spawn_local(async move {
            match file.read_data_uri().await {
                Ok(uri) => draft.update(|d| d.set_image(file.name(), uri)),
                Err(failure) => {
                    log::warn!("[PHOTO] could not read {}: {}", failure.name, failure.reason);
                    ctx.notify(failure.notice());
                }
            }
        });
    };

    let on_suggest = move |_| {
        if suggesting.get_untracked() {
            return;
        }
        set_suggesting.set(true);
        let mut working = draft.get_untracked();
        spawn_local(async move {
            let service = DelayedCaptionService::default();
            let result = working.request_suggestion(&service).await.map(|_| ());
            // Only the suggestion is taken over; edits made meanwhile stay
            draft.update(|d| d.suggestion = working.suggestion.take());
            match result {
                Ok(()) => ctx.notify(ready_notice()),
                Err(e) => ctx.notify(e.notice()),
            }
            set_suggesting.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let current = draft.get_untracked();
        let user = ctx.current_user();
        let services = ctx.services();
        spawn_local(async move {
            match commands::post_photo(&services, &current, user.as_ref()).await {
                Ok(photo) => {
                    store_prepend_photo(&store, photo);
                    ctx.notify(current.success_notice());
                    draft.set(PhotoDraft::default());
                    ctx.navigate(Page::Home);
                }
                Err(e) => {
                    log::warn!("[PHOTO] upload failed: {}", e);
                    ctx.notify_all(e.notices());
                }
            }
            set_submitting.set(false);
        });
    };

    let preview_class = move || draft.with(|d| format!("photo-preview {}", d.filter.class_name));

    view! {
        <form class="photo-upload-form" on:submit=on_submit>
            <h2>"Upload a photo"</h2>

            <label class="file-picker">
                <span>{move || draft.with(|d| d.file_name.clone()).unwrap_or_else(|| "Choose an image".to_string())}</span>
                <input type="file" accept="image/*" on:change=on_file />
            </label>

            {move || draft.with(|d| d.image_data_uri.clone()).map(|src| view! {
                <div class=preview_class>
                    <img src=src alt="Selected photo preview" />
                </div>
            })}

            <label>
                "Category"
                <select
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.category = value);
                    }
                >
                    <option value="">"Select a category"</option>
                    {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
            </label>

            <label>
                "Filter"
                <select
                    prop:value=move || draft.with(|d| d.filter.name.to_string())
                    on:change=move |ev| {
                        if let Some(filter) = find_filter(&event_target_value(&ev)) {
                            draft.update(|d| d.filter = *filter);
                        }
                    }
                >
                    {IMAGE_FILTERS.iter().map(|f| view! { <option value=f.name>{f.name}</option> }).collect_view()}
                </select>
            </label>

            <label>
                "Caption"
                <textarea
                    placeholder="Write a caption..."
                    prop:value=move || draft.with(|d| d.caption.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.caption = value);
                    }
                ></textarea>
            </label>

            <button type="button" class="secondary" disabled=move || suggesting.get() on:click=on_suggest>
                {move || if suggesting.get() { "Thinking..." } else { "✨ Suggest with AI" }}
            </button>

            {move || draft.with(|d| d.suggestion.clone()).map(|s| view! {
                <div class="suggestion-panel">
                    <p class="suggested-caption">{s.caption.clone()}</p>
                    <button type="button" class="link-btn" on:click=move |_| draft.update(|d| d.use_suggested_caption())>
                        "Use caption"
                    </button>

                    <p class="suggested-hashtags">
                        {s.hashtags.iter().map(|t| format!("#{} ", t.trim_start_matches('#'))).collect::<String>()}
                    </p>
                    <button type="button" class="link-btn" on:click=move |_| draft.update(|d| d.use_suggested_hashtags())>
                        "Add hashtags"
                    </button>

                    <p class="suggested-emojis">{s.emojis.join(" ")}</p>
                    <button type="button" class="link-btn" on:click=move |_| draft.update(|d| d.use_suggested_emojis())>
                        "Add emojis"
                    </button>
                </div>
            })}

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}
