// Theme system for the CareScope dashboard
//
// Themes are plain CSS variable sets keyed off a data-theme attribute on
// the root element.

use std::sync::OnceLock;

use dioxus::prelude::*;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// CSS data-theme attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// The theme the toggle switches to from this one.
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parse a theme name, falling back to the default.
    pub fn from_name(name: &str) -> Theme {
        match name {
            "light" => Theme::Light,
            _ => Theme::default(),
        }
    }
}

/// Global theme signal
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Theme chosen on the command line, parked until the UI can apply it.
///
/// `CURRENT_THEME` lives behind the Dioxus runtime and cannot be written
/// before launch; the root component applies this value on its first render.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Park the startup theme choice. Safe to call before launch.
pub fn set_initial_theme(theme: Theme) {
    INITIAL_THEME.set(theme).ok();
}

/// Apply the parked startup theme, if any. Must run inside the component
/// tree, where the Dioxus runtime exists.
pub fn apply_initial_theme() {
    if let Some(theme) = INITIAL_THEME.get() {
        *CURRENT_THEME.write() = *theme;
    }
}

/// Theme toggle: one button that flips between the two themes, labelled
/// with the theme it switches to.
#[component]
pub fn ThemeToggle() -> Element {
    let target = CURRENT_THEME.read().next();

    rsx! {
        button {
            class: "theme-toggle",
            onclick: move |_| {
                *CURRENT_THEME.write() = target;
            },
            "{target.display_name()} theme"
        }
    }
}

/// Themed wrapper component
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "app-root",
            "data-theme": theme.as_str(),
            {children}
        }
    }
}
