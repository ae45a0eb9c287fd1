//! Light/dark theme switching persisted in local storage.

use crate::dom::{listen, warn_on_err, KeyValueStore, LocalStore, Page, Selector, WebPage};
use secure_files_types::Theme;

/// Class of the buttons that flip the theme.
pub const TOGGLE_CLASS: &str = "theme-toggle";

/// Apply `theme` to `<body>` and remember it under `key`.
///
/// Anything other than `"dark"` renders and stores the light theme.
pub fn apply_theme<P: Page, S: KeyValueStore>(
    page: &P,
    store: &S,
    key: &str,
    theme: &str,
) -> Theme {
    let theme = Theme::parse(theme);

    match page.body() {
        Some(body) if theme.is_dark() => {
            warn_on_err(page.add_classes(&body, &[Theme::DARK_CLASS]), "add dark class");
        },
        Some(body) => {
            warn_on_err(page.remove_classes(&body, &[Theme::DARK_CLASS]), "remove dark class");
        },
        None => log::warn!("No <body>, theme class not applied"),
    }

    warn_on_err(store.set(key, theme.as_str()), "persist theme");
    theme
}

/// Stored preference, light when nothing was saved.
pub fn load_theme<S: KeyValueStore>(store: &S, key: &str) -> Theme {
    store.get(key).map(|value| Theme::parse(&value)).unwrap_or_default()
}

/// Flip the theme currently shown on the page.
pub fn toggle_theme<P: Page, S: KeyValueStore>(page: &P, store: &S, key: &str) -> Theme {
    let current = match page.body() {
        Some(body) if page.has_class(&body, Theme::DARK_CLASS) => Theme::Dark,
        Some(_) => Theme::Light,
        None => load_theme(store, key),
    };
    apply_theme(page, store, key, current.toggled().as_str())
}

/// Wire every `.theme-toggle` to [`toggle_theme`].
pub fn attach_theme_toggles(page: &WebPage, store: &LocalStore, key: &str) -> usize {
    let toggles = page.query_all(Selector::Class(TOGGLE_CLASS));
    for toggle in &toggles {
        let page = page.clone();
        let store = store.clone();
        let key = key.to_string();
        let wired = listen(toggle, "click", move |_| {
            let theme = toggle_theme(&page, &store, &key);
            log::debug!("Theme switched to {}", theme);
        });
        warn_on_err(wired, "wire theme toggle");
    }
    toggles.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryPage, MemoryStore};

    const KEY: &str = "theme";

    #[test]
    fn test_dark_adds_class_and_persists() {
        let page = MemoryPage::new();
        let store = MemoryStore::default();

        assert_eq!(apply_theme(&page, &store, KEY, "dark"), Theme::Dark);
        assert!(page.has_class(&page.body().unwrap(), "dark"));
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_anything_but_dark_clears_class() {
        let page = MemoryPage::new();
        let store = MemoryStore::default();
        let body = page.body().unwrap();

        for value in ["light", "Dark", "system", ""] {
            apply_theme(&page, &store, KEY, "dark");
            apply_theme(&page, &store, KEY, value);
            assert!(!page.has_class(&body, "dark"), "{value:?} left the dark class");
            assert_eq!(store.get(KEY).as_deref(), Some("light"));
        }
    }

    #[test]
    fn test_storage_failure_still_applies_class() {
        let page = MemoryPage::new();
        let store = MemoryStore::failing();

        apply_theme(&page, &store, KEY, "dark");
        assert!(page.has_class(&page.body().unwrap(), "dark"));
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn test_load_defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, KEY), Theme::Light);

        store.set(KEY, "dark").unwrap();
        assert_eq!(load_theme(&store, KEY), Theme::Dark);
    }

    #[test]
    fn test_toggle_follows_rendered_state() {
        let page = MemoryPage::new();
        let store = MemoryStore::default();

        assert_eq!(toggle_theme(&page, &store, KEY), Theme::Dark);
        assert_eq!(toggle_theme(&page, &store, KEY), Theme::Light);
        assert_eq!(store.get(KEY).as_deref(), Some("light"));
    }
}
