use dioxus::prelude::*;
use crate::theme::AppColors;

/// Orange pill button. Without `onclick` it submits the enclosing form.
#[component]
pub fn Button(onclick: Option<EventHandler<MouseEvent>>, children: Element) -> Element {
    let kind = if onclick.is_some() { "button" } else { "submit" };
    rsx! {
        button {
            r#type: kind,
            onclick: move |ev| {
                if let Some(handler) = &onclick {
                    handler.call(ev);
                }
            },
            style: "padding: 8px 16px; border-radius: 7px; background: {AppColors::PRIMARY}; color: {AppColors::ON_PRIMARY}; font-weight: 700; border: none; cursor: pointer;",
            {children}
        }
    }
}
