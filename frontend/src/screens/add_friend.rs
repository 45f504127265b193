use dioxus::prelude::*;
use eatnsplit_core::{forms, Roster};
use crate::theme::{spacing, AppColors};
use crate::widgets::{Button, Card};

/// Name + avatar form. Input state lives only while the panel is open.
#[component]
pub fn AddFriendPanel(is_dark: bool, mut roster: Signal<Roster>) -> Element {
    let mut form = use_signal(forms::AddFriendForm::default);
    let on_surface = AppColors::on_surface(is_dark);
    let label_style = format!("display: block; margin-bottom: {}; color: {};", spacing::XS, on_surface);
    let input_style = format!(
        "width: 100%; padding: {}; margin-bottom: {}; border-radius: 4px; border: 1px solid #ced4da; box-sizing: border-box;",
        spacing::SM,
        spacing::MD
    );

    rsx! {
        Card { is_dark,
            form {
                onsubmit: move |ev| {
                    ev.prevent_default();
                    form.write().submit(&mut roster.write());
                },
                label { style: "{label_style}", "👫 Friend name" }
                input {
                    r#type: "text",
                    value: "{form.read().name}",
                    oninput: move |ev| form.write().set_name(ev.value()),
                    style: "{input_style}",
                }
                label { style: "{label_style}", "🎇 Image URL" }
                input {
                    r#type: "text",
                    value: "{form.read().avatar_url}",
                    oninput: move |ev| form.write().set_avatar_url(ev.value()),
                    style: "{input_style}",
                }
                Button { "Add" }
            }
        }
    }
}
