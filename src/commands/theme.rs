//! Theme Classes
//!
//! Mirrors `ThemeSettings` onto the document root element.

use zuzzbee_core::settings::ThemeSettings;

/// Replace any `theme-*` class on `<html>` and toggle `dark`
pub fn apply_theme(settings: &ThemeSettings) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let stale: Vec<String> = (0..classes.length())
        .filter_map(|i| classes.item(i))
        .filter(|c| c.starts_with("theme-"))
        .collect();
    for class in &stale {
        let _ = classes.remove_1(class);
    }
    let _ = classes.add_1(&settings.theme_class());
    let _ = classes.toggle_with_force("dark", settings.mode.is_dark());
}
