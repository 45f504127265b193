use dioxus::prelude::*;

#[component]
pub fn Avatar(src: String, alt: String) -> Element {
    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            style: "width: 48px; height: 48px; border-radius: 50%; grid-row: span 2;",
        }
    }
}
