//! Static Configuration
//!
//! Constants shared by the domain layer and the UI.

pub const APP_NAME: &str = "ZuzzBee";

/// Upper bound on slides per story; extra selections are dropped
pub const MAX_IMAGES_PER_STORY: usize = 10;

/// Local storage key for the mock session user
pub const SESSION_USER_KEY: &str = "photoshere_mock_user";
/// Local storage key for appearance settings
pub const THEME_SETTINGS_KEY: &str = "photoshere_theme_settings";

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

pub const DEFAULT_PROFILE_IMAGE: &str = "https://placehold.co/100x100.png";
pub const DEFAULT_COVER_IMAGE: &str = "https://placehold.co/1920x1080.png";
pub const STORY_PLACEHOLDER_IMAGE: &str = "https://placehold.co/64x64.png?text=S";
pub const CAMPAIGN_PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

pub const CATEGORIES: &[&str] = &[
    "Nature", "Travel", "Food", "Fashion", "Sports",
    "Animals", "Art", "Music", "Technology", "Architecture",
    "People", "Street", "Black & White", "Events", "Lifestyle",
    "Abstract", "Vintage", "Business", "Education", "Health",
];

/// Named CSS filter applied to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFilter {
    pub name: &'static str,
    pub class_name: &'static str,
}

pub const IMAGE_FILTERS: &[ImageFilter] = &[
    ImageFilter { name: "Original", class_name: "" },
    ImageFilter { name: "Black & White", class_name: "grayscale" },
    ImageFilter { name: "Sepia", class_name: "sepia" },
    ImageFilter { name: "Vibrant", class_name: "saturate-150 contrast-125" },
    ImageFilter { name: "Cool", class_name: "hue-rotate-[-15deg] saturate-125" },
    ImageFilter { name: "Warm", class_name: "hue-rotate-[15deg] saturate-125" },
    ImageFilter { name: "Sketchy", class_name: "grayscale contrast-200 brightness-150" },
    ImageFilter { name: "Dramatic B&W", class_name: "grayscale contrast-175 brightness-110" },
    ImageFilter { name: "Vintage Film", class_name: "sepia saturate-125 contrast-75 brightness-90" },
    ImageFilter { name: "Faded Glory", class_name: "opacity-80 saturate-60 contrast-125 brightness-110" },
    ImageFilter { name: "Golden Hour", class_name: "sepia-[30%] saturate-160 contrast-110 hue-rotate-[-20deg] brightness-105" },
    ImageFilter { name: "High Contrast", class_name: "contrast-200" },
    ImageFilter { name: "Muted Tones", class_name: "saturate-70 contrast-90" },
    ImageFilter { name: "X-Ray", class_name: "invert grayscale contrast-200 brightness-125" },
    ImageFilter { name: "Cyberpunk", class_name: "hue-rotate-[240deg] saturate-200 contrast-130 brightness-105" },
];

/// Look up a filter by display name
pub fn find_filter(name: &str) -> Option<&'static ImageFilter> {
    IMAGE_FILTERS.iter().find(|f| f.name == name)
}

/// Selectable color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub id: &'static str,
    pub name: &'static str,
}

pub const COLOR_THEMES: &[ColorTheme] = &[
    ColorTheme { id: "forest-canopy", name: "Forest Canopy" },
    ColorTheme { id: "ocean-breeze", name: "Ocean Breeze" },
    ColorTheme { id: "sunset-glow", name: "Sunset Glow" },
    ColorTheme { id: "midnight-sapphire", name: "Midnight Sapphire" },
    ColorTheme { id: "cherry-blossom", name: "Cherry Blossom" },
    ColorTheme { id: "desert-mirage", name: "Desert Mirage" },
    ColorTheme { id: "lavender-fields", name: "Lavender Fields" },
    ColorTheme { id: "arctic-dawn", name: "Arctic Dawn" },
    ColorTheme { id: "volcanic-ash", name: "Volcanic Ash" },
    ColorTheme { id: "tropical-rainforest", name: "Tropical Rainforest" },
];

pub const DEFAULT_COLOR_THEME_ID: &str = "forest-canopy";

pub fn is_known_color_theme(id: &str) -> bool {
    COLOR_THEMES.iter().any(|t| t.id == id)
}

/// (value, label) pairs for select inputs
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("non-binary", "Non-binary"),
    ("other", "Other"),
    ("prefer-not-to-say", "Prefer not to say"),
];

pub const PRIVACY_OPTIONS: &[(&str, &str)] = &[
    ("public", "Public"),
    ("private", "Private"),
];

pub const FUNDRAISER_CATEGORIES: &[&str] = &[
    "Medical", "Education", "Animal Welfare", "Environment", "Community",
    "Creative Arts", "Technology", "Sports", "Memorial", "Charity",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_known() {
        assert!(is_known_color_theme(DEFAULT_COLOR_THEME_ID));
        assert!(!is_known_color_theme("neon-nights"));
    }

    #[test]
    fn test_first_filter_is_original() {
        assert_eq!(IMAGE_FILTERS[0].class_name, "");
        assert_eq!(find_filter("Sepia").map(|f| f.class_name), Some("sepia"));
    }
}
