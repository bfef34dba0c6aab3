//! UI Components
//!
//! Reusable Leptos components.

mod app_header;
mod app_sidebar;
mod campaign_card;
mod campaign_list;
mod edit_profile_form;
mod home_feed;
mod login_form;
mod photo_card;
mod photo_upload_form;
mod profile_header;
mod signup_form;
mod story_avatar;
mod story_reel;
mod story_upload_form;
mod story_viewer;
mod theme_toggle;
mod toaster;

pub use app_header::AppHeader;
pub use app_sidebar::AppSidebar;
pub use campaign_card::CampaignCard;
pub use campaign_list::CampaignList;
pub use edit_profile_form::EditProfileForm;
pub use home_feed::HomeFeed;
pub use login_form::LoginForm;
pub use photo_card::PhotoCard;
pub use photo_upload_form::PhotoUploadForm;
pub use profile_header::ProfileHeader;
pub use signup_form::SignupForm;
pub use story_avatar::StoryAvatar;
pub use story_reel::StoryReel;
pub use story_upload_form::StoryUploadForm;
pub use story_viewer::StoryViewerDialog;
pub use theme_toggle::ThemeToggle;
pub use toaster::Toaster;
