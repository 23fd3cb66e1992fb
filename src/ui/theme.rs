//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Whether the effective theme is dark, considering auto mode.
    pub fn is_dark(&self) -> bool {
        match self.mode.get() {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => self.system_prefers_dark.get(),
        }
    }

    /// Cycle dark -> light -> dark, leaving auto for explicit choice.
    pub fn toggle(&self) {
        let next = if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.persist_theme(mode);
        self.apply_theme_class();
    }

    /// Persist theme to localStorage
    fn persist_theme(&self, mode: ThemeMode) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item("eventra-theme", mode.as_str());
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = mode;
        }
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.is_dark() {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item("eventra-theme") {
                    return ThemeMode::from_str(&value);
                }
            }
        }
    }
    ThemeMode::Auto
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide the theme context to the component tree
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        mode: RwSignal::new(load_persisted_theme()),
        system_prefers_dark: RwSignal::new(detect_system_prefers_dark()),
    };

    ctx.apply_theme_class();
    provide_context(ctx);
    ctx
}

/// Get the theme context from the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_through_storage_strings() {
        for mode in [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::from_str("plaid"), ThemeMode::Auto);
    }
}
