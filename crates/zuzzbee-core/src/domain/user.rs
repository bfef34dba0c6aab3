//! User Entity
//!
//! Profile data for the mock session user and for content owners.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::{DEFAULT_COVER_IMAGE, DEFAULT_PROFILE_IMAGE};
use crate::ids::next_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "private" => Privacy::Private,
            _ => Privacy::Public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Minimal user with only the required fields set
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
            profile_image_url: None,
            cover_image_url: None,
            bio: None,
            website_url: None,
            gender: None,
            privacy: None,
            followers_count: 0,
            following_count: 0,
            email: None,
        }
    }

    /// Display name when set, username otherwise
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// Avatar fallback letter
    pub fn initial(&self) -> String {
        self.display_label()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn avatar_url(&self) -> &str {
        self.profile_image_url.as_deref().unwrap_or(DEFAULT_PROFILE_IMAGE)
    }

    pub fn cover_url(&self) -> &str {
        self.cover_image_url.as_deref().unwrap_or(DEFAULT_COVER_IMAGE)
    }

    /// Build a complete session user, filling every missing field with the
    /// mock defaults.
    pub fn from_patch(patch: UserPatch) -> Self {
        Self {
            id: patch.id.unwrap_or_else(|| next_id("user")),
            username: patch.username.unwrap_or_else(|| "testuser".to_string()),
            display_name: Some(patch.display_name.unwrap_or_else(|| "Test User".to_string())),
            profile_image_url: Some(
                patch.profile_image_url.unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
            ),
            cover_image_url: Some(
                patch.cover_image_url.unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
            ),
            bio: Some(patch.bio.unwrap_or_else(|| "This is a mock bio.".to_string())),
            website_url: Some(patch.website_url.unwrap_or_default()),
            gender: Some(patch.gender.unwrap_or_else(|| "prefer-not-to-say".to_string())),
            privacy: Some(patch.privacy.unwrap_or_default()),
            followers_count: patch.followers_count.unwrap_or(100),
            following_count: patch.following_count.unwrap_or(50),
            email: Some(patch.email.unwrap_or_else(|| "test@example.com".to_string())),
        }
    }

    /// Overwrite the fields present in `patch`
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if patch.display_name.is_some() {
            self.display_name = patch.display_name;
        }
        if patch.profile_image_url.is_some() {
            self.profile_image_url = patch.profile_image_url;
        }
        if patch.cover_image_url.is_some() {
            self.cover_image_url = patch.cover_image_url;
        }
        if patch.bio.is_some() {
            self.bio = patch.bio;
        }
        if patch.website_url.is_some() {
            self.website_url = patch.website_url;
        }
        if patch.gender.is_some() {
            self.gender = patch.gender;
        }
        if patch.privacy.is_some() {
            self.privacy = patch.privacy;
        }
        if let Some(count) = patch.followers_count {
            self.followers_count = count;
        }
        if let Some(count) = patch.following_count {
            self.following_count = count;
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
    }
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Partial user update (every field optional)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub id: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub bio: Option<String>,
    pub website_url: Option<String>,
    pub gender: Option<String>,
    pub privacy: Option<Privacy>,
    pub followers_count: Option<u32>,
    pub following_count: Option<u32>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_falls_back_to_username() {
        let mut user = User::new("u1", "alice");
        assert_eq!(user.display_label(), "alice");
        user.display_name = Some(String::new());
        assert_eq!(user.display_label(), "alice");
        user.display_name = Some("Alice A.".to_string());
        assert_eq!(user.display_label(), "Alice A.");
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_from_patch_fills_defaults() {
        let user = User::from_patch(UserPatch {
            email: Some("user@example.com".to_string()),
            username: Some("exampleUser".to_string()),
            ..Default::default()
        });
        assert_eq!(user.username, "exampleUser");
        assert_eq!(user.display_name.as_deref(), Some("Test User"));
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
        assert_eq!(user.followers_count, 100);
        assert_eq!(user.following_count, 50);
        assert_eq!(user.privacy, Some(Privacy::Public));
        assert!(user.id.starts_with("user_"));
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut user = User::from_patch(UserPatch::default());
        user.apply(UserPatch {
            bio: Some("New bio".to_string()),
            ..Default::default()
        });
        assert_eq!(user.bio.as_deref(), Some("New bio"));
        assert_eq!(user.username, "testuser");
    }

    #[test]
    fn test_serializes_camel_case() {
        let user = User::new("u1", "bob");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"followersCount\":0"));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
