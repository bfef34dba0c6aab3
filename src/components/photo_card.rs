//! Photo Card Component
//!
//! One feed entry: owner, image with its filter, local like/bookmark
//! toggles, caption, tags, a comment preview and an inline comment box.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::{Notice, Photo, User};

use crate::commands;
use crate::context::use_app_context;
use crate::format::{format_count, plural, time_ago};
use crate::store::{store_update_photo, use_app_store, AppStateStoreFields};

#[component]
pub fn PhotoCard(photo_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let photo_id = StoredValue::new(photo_id);

    let photo = Memo::new(move |_| {
        photo_id.with_value(|id| {
            store.photos().with(|photos| photos.iter().find(|p| &p.id == id).cloned())
        })
    });

    let (show_comment_input, set_show_comment_input) = signal(false);
    let (comment_text, set_comment_text) = signal(String::new());
    let (enlarged, set_enlarged) = signal(false);

    // Write the repository result back into the store
    let apply = move |result: Result<Option<Photo>, String>| match result {
        Ok(Some(updated)) => store_update_photo(&store, updated),
        Ok(None) => log::warn!("[CARD] photo {} is gone", photo_id.get_value()),
        Err(e) => ctx.notify(Notice::destructive("Something went wrong").with_description(e)),
    };

    let on_like = move |_| {
        let services = ctx.services();
        let id = photo_id.get_value();
        spawn_local(async move {
            apply(commands::toggle_like(&services, &id).await);
        });
    };

    let on_bookmark = move |_| {
        let services = ctx.services();
        let id = photo_id.get_value();
        spawn_local(async move {
            let result = commands::toggle_bookmark(&services, &id).await;
            if let Ok(Some(p)) = &result {
                ctx.notify(Notice::info(if p.is_bookmarked_by_current_user {
                    "Bookmarked!"
                } else {
                    "Bookmark removed."
                }));
            }
            apply(result);
        });
    };

    let on_share = move |_| {
        log::info!("[CARD] sharing photo {}", photo_id.get_value());
        ctx.notify(Notice::info("Shared!").with_description("Photo link (mock) copied to clipboard."));
    };

    let on_view_all = move |_| {
        ctx.notify(Notice::info("Feature coming soon!").with_description("Ability to view all comments."));
    };

    let on_post_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment_text.get_untracked();
        let Some(author) = ctx.current_user() else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        let services = ctx.services();
        let id = photo_id.get_value();
        spawn_local(async move {
            let result = commands::add_comment(&services, &id, &author, &text).await;
            if matches!(result, Ok(Some(_))) {
                set_comment_text.set(String::new());
                set_show_comment_input.set(false);
                ctx.notify(Notice::success("Comment posted!"));
            }
            apply(result);
        });
    };

    let body = move || {
        photo.get().map(|p| {
            let owner = p.user.clone().unwrap_or_else(|| User::new("unknown", "UnknownUser"));
            let image_class = format!("photo-image {}", p.filter);
            let enlarged_class = format!("photo-enlarged {}", p.filter);
            let alt = if p.caption.is_empty() {
                format!("Photo by {}", owner.username)
            } else {
                p.caption.clone()
            };
            let heart_class = if p.is_liked_by_current_user { "icon-btn liked" } else { "icon-btn" };
            let bookmark_class = if p.is_bookmarked_by_current_user { "icon-btn bookmarked" } else { "icon-btn" };
            let more_comments = p.has_more_comments().then_some(p.comments_count);
            let comments = p.preview_comments().to_vec();
            let image_url = p.image_url.clone();
            let dialog_src = image_url.clone();
            let dialog_alt = alt.clone();

            view! {
                <header class="photo-card-header">
                    <span class="avatar">
                        <img src=owner.avatar_url().to_string() alt=owner.display_label().to_string() />
                    </span>
                    <div class="photo-owner">
                        <span class="photo-owner-name">{owner.display_label().to_string()}</span>
                        {(!p.category.is_empty()).then(|| view! {
                            <span class="badge">{p.category.clone()}</span>
                        })}
                    </div>
                    <time class="photo-time">{time_ago(p.created_at, Utc::now())}</time>
                </header>

                <div class=image_class on:click=move |_| set_enlarged.set(true)>
                    <img src=image_url alt=alt />
                </div>
                <Show when=move || enlarged.get()>
                    <div class="photo-dialog-backdrop" on:click=move |_| set_enlarged.set(false)>
                        <img class=enlarged_class.clone() src=dialog_src.clone() alt=dialog_alt.clone() />
                    </div>
                </Show>

                <div class="photo-actions">
                    <button type="button" class=heart_class aria-label="Like" on:click=on_like>"♥"</button>
                    <button
                        type="button"
                        class="icon-btn"
                        aria-label="Comment"
                        on:click=move |_| set_show_comment_input.update(|v| *v = !*v)
                    >
                        "💬"
                    </button>
                    <button type="button" class="icon-btn" aria-label="Share" on:click=on_share>"↗"</button>
                    <button type="button" class=bookmark_class aria-label="Bookmark" on:click=on_bookmark>"🔖"</button>
                </div>

                <div class="photo-likes">{plural(p.likes_count, "like", "likes")}</div>

                {(!p.caption.is_empty()).then(|| view! {
                    <p class="photo-caption">
                        <strong>{owner.username.clone()}</strong>" "{p.caption.clone()}
                    </p>
                })}

                <div class="photo-tags">
                    {p.hashtags.iter().map(|tag| view! { <span class="hashtag">"#"{tag.clone()}</span> }).collect_view()}
                    {p.emojis.iter().map(|emoji| view! { <span class="emoji">{emoji.clone()}</span> }).collect_view()}
                </div>

                <div class="photo-comments">
                    {comments.into_iter().map(|c| view! {
                        <div class="comment">
                            <strong>{c.user.map(|u| u.username).unwrap_or_else(|| "User".to_string())}</strong>
                            ": "{c.text}
                        </div>
                    }).collect_view()}
                    {more_comments.map(|count| view! {
                        <button type="button" class="link-btn" on:click=on_view_all>
                            {format!("View all {} comments", format_count(count))}
                        </button>
                    })}
                </div>
            }
        })
    };

    view! {
        <article class="photo-card">
            {body}
            <Show when=move || show_comment_input.get() && ctx.is_authenticated()>
                <form class="comment-form" on:submit=on_post_comment>
                    <input
                        type="text"
                        placeholder="Add a comment..."
                        prop:value=move || comment_text.get()
                        on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || comment_text.with(|t| t.trim().is_empty())
                    >
                        "Post"
                    </button>
                </form>
            </Show>
        </article>
    }
}
