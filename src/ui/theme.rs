//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state, resolved to a [`Theme`]
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::Theme;

#[allow(dead_code)]
const STORAGE_KEY_THEME: &str = "tripwise-theme";

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

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    /// Effective theme for this mode given the system preference
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
            ThemeMode::Auto if system_prefers_dark => Theme::Dark,
            ThemeMode::Auto => Theme::Light,
        }
    }
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemeMode::Dark,
            Theme::Light => ThemeMode::Light,
        }
    }
}

/// Effective theme from a stored mode string and the system preference
///
/// A missing or unknown stored value means [`ThemeMode::Auto`].
pub fn initial_theme(stored: Option<&str>, system_dark: bool) -> Theme {
    stored_mode(stored).resolve(system_dark)
}

fn stored_mode(stored: Option<&str>) -> ThemeMode {
    stored.map(ThemeMode::parse).unwrap_or_default()
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Effective theme (considering auto mode)
    pub theme: Memo<Theme>,
    system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    fn new(mode: ThemeMode, system_dark: bool) -> Self {
        let mode = RwSignal::new(mode);
        let system_prefers_dark = RwSignal::new(system_dark);
        let theme = Memo::new(move |_| mode.get().resolve(system_prefers_dark.get()));

        Self {
            mode,
            theme,
            system_prefers_dark,
        }
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.persist_theme(mode);
        self.apply_theme_class();
    }

    /// Switch to the opposite of the effective theme
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_mode(next.into());
    }

    /// Drop an explicit choice and follow the system preference again
    pub fn follow_system(&self) {
        self.set_mode(ThemeMode::Auto);
    }

    /// Whether the mode is [`ThemeMode::Auto`]
    pub fn follows_system(&self) -> bool {
        self.mode.get() == ThemeMode::Auto
    }

    /// Persist theme to localStorage
    fn persist_theme(&self, mode: ThemeMode) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY_THEME, mode.as_str());
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
                        if self.theme.get_untracked().is_dark() {
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

/// Read the stored theme mode from localStorage
#[cfg(not(feature = "ssr"))]
fn read_stored_mode() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY_THEME).ok()?
}

/// Detect system color scheme preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|media_query| media_query.matches())
}

/// Provide theme context to the application
///
/// Server and client both start from `initial_theme(None, false)` so the
/// hydrated markup matches. The stored mode and the system preference are
/// read after hydration, which updates `theme` and every view reading it.
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext::new(stored_mode(None), false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let mode = ctx.mode;
        let system_prefers_dark = ctx.system_prefers_dark;

        // Restore settings and listen for system theme changes
        Effect::new(move |_| {
            mode.set(stored_mode(read_stored_mode().as_deref()));
            system_prefers_dark.set(detect_system_prefers_dark());

            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // The listener lives as long as the page
                    handler.forget();
                }
            }
        });

        // Apply theme class initially and on changes
        Effect::new(move |_| {
            let _ = ctx.theme.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
