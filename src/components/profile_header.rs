//! Profile Header Component
//!
//! Cover, avatar, name, bio, website and counts for the session user.

use leptos::prelude::*;
use zuzzbee_core::User;

use crate::context::{use_app_context, Page};
use crate::format::format_count;

#[component]
pub fn ProfileHeader(user: User, photo_count: usize) -> impl IntoView {
    let ctx = use_app_context();
    let (cover_open, set_cover_open) = signal(false);

    let label = user.display_label().to_string();
    let cover = user.cover_url().to_string();
    let cover_dialog = cover.clone();
    let website = user.website_url.clone().filter(|w| !w.trim().is_empty());
    let bio = user.bio.clone().filter(|b| !b.trim().is_empty());

    view! {
        <section class="profile-header">
            <div class="profile-cover" on:click=move |_| set_cover_open.set(true)>
                <img src=cover alt=format!("Cover photo of {}", label) />
            </div>
            <Show when=move || cover_open.get()>
                <div class="dialog-backdrop" on:click=move |_| set_cover_open.set(false)>
                    <img class="cover-enlarged" src=cover_dialog.clone() alt="Cover photo" />
                </div>
            </Show>

            <div class="profile-card">
                <span class="avatar large">
                    <span class="avatar-fallback">{user.initial()}</span>
                    <img src=user.avatar_url().to_string() alt=user.display_label().to_string() />
                </span>
                <div class="profile-identity">
                    <h1>{user.display_label().to_string()}</h1>
                    <p class="muted">"@"{user.username.clone()}</p>
                    {bio.map(|bio| view! { <p class="profile-bio">{bio}</p> })}
                    {website.map(|url| {
                        let href = url.clone();
                        view! {
                            <a class="profile-website" href=href target="_blank" rel="noopener noreferrer">{url}</a>
                        }
                    })}
                </div>
                <button type="button" class="secondary" on:click=move |_| ctx.navigate(Page::EditProfile)>
                    "Edit Profile"
                </button>
            </div>

            <div class="profile-counts">
                <div><strong>{format_count(photo_count as u32)}</strong><span>"Posts"</span></div>
                <div><strong>{format_count(user.followers_count)}</strong><span>"Followers"</span></div>
                <div><strong>{format_count(user.following_count)}</strong><span>"Following"</span></div>
            </div>
        </section>
    }
}
