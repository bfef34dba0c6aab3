//! Edit Profile Form Component
//!
//! Profile fields written through `update_user`, plus the appearance
//! settings (mode and color theme).

use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::config::{COLOR_THEMES, GENDER_OPTIONS, PRIVACY_OPTIONS};
use zuzzbee_core::settings::{AuthError, ThemeMode};
use zuzzbee_core::upload::ImageFile;
use zuzzbee_core::{Notice, Privacy, User, UserPatch};

use crate::commands::picked_files;
use crate::components::ThemeToggle;
use crate::context::{use_app_context, Page};

/// Editable copy of the profile fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileFields {
    pub display_name: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub website_url: String,
    pub gender: String,
    pub privacy: Privacy,
    pub profile_image_url: String,
    pub cover_image_url: String,
}

impl ProfileFields {
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone().unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            website_url: user.website_url.clone().unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_else(|| "prefer-not-to-say".to_string()),
            privacy: user.privacy.unwrap_or_default(),
            profile_image_url: user.avatar_url().to_string(),
            cover_image_url: user.cover_url().to_string(),
        }
    }

    /// Patch for `update_user`; a blank username is refused
    pub fn to_patch(&self) -> Result<UserPatch, AuthError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingUsername);
        }
        Ok(UserPatch {
            username: Some(username.to_string()),
            display_name: Some(self.display_name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            bio: Some(self.bio.clone()),
            website_url: Some(self.website_url.trim().to_string()),
            gender: Some(self.gender.clone()),
            privacy: Some(self.privacy),
            profile_image_url: Some(self.profile_image_url.clone()),
            cover_image_url: Some(self.cover_image_url.clone()),
            ..Default::default()
        })
    }
}

/// Text input bound to one field
fn text_input(
    fields: RwSignal<ProfileFields>,
    label: &'static str,
    kind: &'static str,
    get: fn(&ProfileFields) -> String,
    set: fn(&mut ProfileFields, String),
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=kind
                prop:value=move || fields.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[derive(Clone, Copy)]
enum ImageSlot {
    Profile,
    Cover,
}

#[component]
pub fn EditProfileForm() -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(
        ctx.current_user().map(|u| ProfileFields::from_user(&u)).unwrap_or_default(),
    );

    let on_image = move |ev: web_sys::Event, slot: ImageSlot| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = picked_files(&input).into_iter().next() else {
            return;
        };
        spawn_local(async move {
            match file.read_data_uri().await {
                Ok(uri) => fields.update(|f| match slot {
                    ImageSlot::Profile => f.profile_image_url = uri,
                    ImageSlot::Cover => f.cover_image_url = uri,
                }),
                Err(failure) => ctx.notify(failure.notice()),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = fields.with_untracked(|f| f.to_patch()).and_then(|patch| ctx.update_user(patch));
        match result {
            Ok(()) => {
                ctx.notify(
                    Notice::success("Profile Updated")
                        .with_description("Your profile information has been successfully updated."),
                );
                ctx.navigate(Page::Profile);
            }
            Err(e) => ctx.notify(Notice::destructive("Update Failed").with_description(e.to_string())),
        }
    };

    view! {
        <form class="edit-profile-form" on:submit=on_submit>
            <h2>"Edit Profile"</h2>

            <div class="image-pickers">
                <label class="avatar-picker">
                    <span class="avatar large">
                        <img src=move || fields.with(|f| f.profile_image_url.clone()) alt="Profile image" />
                    </span>
                    <input type="file" accept="image/*" on:change=move |ev| on_image(ev, ImageSlot::Profile) />
                </label>
                <label class="cover-picker">
                    <img src=move || fields.with(|f| f.cover_image_url.clone()) alt="Cover image" />
                    <input type="file" accept="image/*" on:change=move |ev| on_image(ev, ImageSlot::Cover) />
                </label>
            </div>

            {text_input(fields, "Display name", "text", |f| f.display_name.clone(), |f, v| f.display_name = v)}
            {text_input(fields, "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
            {text_input(fields, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
            {text_input(fields, "Website", "url", |f| f.website_url.clone(), |f, v| f.website_url = v)}

            <label>
                "Bio"
                <textarea
                    prop:value=move || fields.with(|f| f.bio.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.bio = value);
                    }
                ></textarea>
            </label>

            <label>
                "Gender"
                <select
                    prop:value=move || fields.with(|f| f.gender.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.gender = value);
                    }
                >
                    {GENDER_OPTIONS.iter().map(|(value, label)| view! { <option value=*value>{*label}</option> }).collect_view()}
                </select>
            </label>

            <fieldset class="privacy">
                <legend>"Account privacy"</legend>
                {PRIVACY_OPTIONS.iter().map(|(value, label)| {
                    let privacy = Privacy::from_str(value);
                    view! {
                        <label class="radio">
                            <input
                                type="radio"
                                name="privacy"
                                value=*value
                                prop:checked=move || fields.with(|f| f.privacy == privacy)
                                on:change=move |_| fields.update(|f| f.privacy = privacy)
                            />
                            {*label}
                        </label>
                    }
                }).collect_view()}
            </fieldset>

            <fieldset class="appearance">
                <legend>"Appearance"</legend>
                <div class="mode-row">
                    <span>{move || if ctx.theme.with(|t| t.mode.is_dark()) { "Dark mode" } else { "Light mode" }}</span>
                    <ThemeToggle />
                    <button type="button" class="link-btn" on:click=move |_| ctx.set_mode(ThemeMode::Light)>"Light"</button>
                    <button type="button" class="link-btn" on:click=move |_| ctx.set_mode(ThemeMode::Dark)>"Dark"</button>
                </div>
                <label>
                    "Color theme"
                    <select
                        prop:value=move || ctx.theme.with(|t| t.color_theme_id.clone())
                        on:change=move |ev| {
                            ctx.set_color_theme(&event_target_value(&ev));
                        }
                    >
                        {COLOR_THEMES.iter().map(|t| view! { <option value=t.id>{t.name}</option> }).collect_view()}
                    </select>
                </label>
            </fieldset>

            <div class="form-actions">
                <button type="button" class="secondary" on:click=move |_| ctx.navigate(Page::Profile)>"Cancel"</button>
                <button type="submit">"Save Changes"</button>
            </div>
        </form>
    }
}
