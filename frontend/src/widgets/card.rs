use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(is_dark: bool, #[props(default)] highlighted: bool, children: Element) -> Element {
    let surface = if highlighted {
        AppColors::surface_selected(is_dark)
    } else {
        AppColors::surface(is_dark)
    };
    rsx! {
        div {
            style: "background: {surface}; border-radius: 7px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::SM};",
            {children}
        }
    }
}
