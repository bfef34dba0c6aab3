//! ZuzzBee Frontend App
//!
//! Main application component: builds the services, provides context and
//! the store, then switches between the auth pages and the signed-in layout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use zuzzbee_core::AppServices;

use crate::commands::{self, BrowserStorage};
use crate::components::{
    AppHeader, AppSidebar, CampaignList, EditProfileForm, HomeFeed, LoginForm, PhotoCard,
    PhotoUploadForm, ProfileHeader, SignupForm, StoryUploadForm, Toaster,
};
use crate::context::{resolve_page, use_app_context, AppContext, Page};
use crate::store::{store_photos_by_user, use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::new(Arc::new(BrowserStorage));
    let ctx = AppContext::new(services, commands::system_prefers_dark());
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Mirror appearance onto <html>
    Effect::new(move |_| {
        ctx.theme.with(commands::apply_theme);
    });

    // Load collections on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let services = ctx.services();
        log::debug!("[APP] Loading collections, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_stories(&services).await {
                Ok(loaded) => *store.stories().write() = loaded,
                Err(e) => log::error!("[APP] failed to load stories: {}", e),
            }
            match commands::list_photos(&services).await {
                Ok(loaded) => *store.photos().write() = loaded,
                Err(e) => log::error!("[APP] failed to load photos: {}", e),
            }
            match commands::list_campaigns(&services).await {
                Ok(loaded) => *store.campaigns().write() = loaded,
                Err(e) => log::error!("[APP] failed to load campaigns: {}", e),
            }
        });
    });

    let (sidebar_open, set_sidebar_open) = signal(false);
    let current_page = Memo::new(move |_| resolve_page(ctx.page.get(), ctx.is_authenticated()));

    view! {
        <Toaster />
        {move || match current_page.get() {
            Page::Login => view! {
                <div class="auth-layout"><LoginForm /></div>
            }.into_any(),
            Page::Signup => view! {
                <div class="auth-layout"><SignupForm /></div>
            }.into_any(),
            page => view! {
                <div class="app-layout">
                    <AppHeader set_sidebar_open=set_sidebar_open />
                    <div class="app-body">
                        <AppSidebar open=sidebar_open set_open=set_sidebar_open />
                        <main class="main-content">{page_view(page)}</main>
                    </div>
                </div>
            }.into_any(),
        }}
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomeFeed /> }.into_any(),
        Page::UploadPhoto => view! { <PhotoUploadForm /> }.into_any(),
        Page::AddStory => view! { <StoryUploadForm /> }.into_any(),
        Page::Campaigns => view! { <CampaignList /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::EditProfile => view! { <EditProfileForm /> }.into_any(),
        Page::Login | Page::Signup => ().into_any(),
    }
}

/// Session user's header and their own photos
#[component]
fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    move || {
        ctx.current_user().map(|user| {
            let photos = store_photos_by_user(&store, &user.id);
            let photo_count = photos.len();
            view! {
                <ProfileHeader user=user photo_count=photo_count />
                <div class="profile-photos">
                    {photos.into_iter().map(|p| view! { <PhotoCard photo_id=p.id /> }).collect_view()}
                </div>
            }
        })
    }
}
