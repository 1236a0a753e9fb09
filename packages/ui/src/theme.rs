//! Light/dark theme, persisted under the `theme` key and applied as a
//! `dark` class on the document element.

use dioxus::prelude::*;
use store::Theme;

use crate::context::use_app_context;
use crate::icons::{FaMoon, FaSun};
use crate::{platform, Icon};

/// Context signal holding the active theme.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Apply `theme` to the document.
pub fn apply_theme(theme: Theme) {
    platform::set_dark_class(theme == Theme::Dark);
}

/// Must sit inside `ConfigProvider`.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let context = use_app_context();
    let initial = context.store.load_theme();
    let theme = use_context_provider(|| Signal::new(initial));

    use_effect(move || {
        let current = theme();
        apply_theme(current);
        if let Err(e) = context.store.save_theme(current) {
            tracing::warn!("could not persist theme: {e}");
        }
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let dark = theme() == Theme::Dark;

    rsx! {
        button {
            class: "icon-button",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let next = theme().toggle();
                theme.set(next);
            },
            if dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
