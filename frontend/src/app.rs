use dioxus::prelude::*;
use eatnsplit_core::Roster;
use crate::screens::HomeScreen;
use crate::theme::AppColors;

/// Root component. Owns the roster for the whole session and hands it to the screens.
#[component]
pub fn App() -> Element {
    let roster = use_signal(|| {
        Roster::seeded().unwrap_or_else(|e| {
            tracing::error!("seed roster unavailable, starting empty: {}", e);
            Roster::default()
        })
    });
    let mut is_dark = use_signal(|| false);
    let background = AppColors::background(is_dark());

    rsx! {
        div { style: "font-family: system-ui, sans-serif; min-height: 100vh; background: {background};",
            HomeScreen {
                is_dark: is_dark(),
                roster,
                on_toggle_theme: move |_| is_dark.set(!is_dark()),
            }
        }
    }
}
