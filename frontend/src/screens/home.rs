use dioxus::prelude::*;
use eatnsplit_core::config::APP_TITLE;
use eatnsplit_core::Roster;
use crate::screens::{AddFriendPanel, FriendList, SplitBillPanel};
use crate::theme::{spacing, AppColors};
use crate::widgets::Button;

#[component]
pub fn HomeScreen(
    is_dark: bool,
    mut roster: Signal<Roster>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let add_friend_open = roster.read().is_add_friend_open();
    let selected = roster.read().selected_friend().cloned();

    rsx! {
        main {
            div { style: "display: flex; justify-content: flex-end; padding: {spacing::MD};",
                button {
                    r#type: "button",
                    onclick: move |_| on_toggle_theme.call(()),
                    style: "padding: 8px 16px; border-radius: 7px; border: 1px solid {on_surface}; background: transparent; color: {on_surface}; cursor: pointer;",
                    if is_dark { "☀️ Light" } else { "🌙 Dark" }
                }
            }
            div { style: "text-align: center; margin: 1rem auto 5rem;",
                h1 { style: "font-size: 32px; color: {AppColors::PRIMARY};", "{APP_TITLE}" }
                h3 { style: "color: {on_surface};",
                    "Split your bills, "
                    span { style: "color: {AppColors::CREDIT};", "credit" }
                    " and "
                    span { style: "color: {AppColors::DEBT};", "credit." }
                }
            }
            div { style: "display: grid; grid-template-columns: 34rem 44rem; column-gap: 4rem; align-items: start; justify-content: center;",
                div { style: "display: flex; flex-direction: column; gap: {spacing::SM};",
                    FriendList { is_dark, roster }
                    if add_friend_open {
                        AddFriendPanel { is_dark, roster }
                    }
                    div { style: "align-self: flex-end;",
                        Button {
                            onclick: move |_| roster.write().toggle_add_friend_panel(),
                            if add_friend_open { "Close" } else { "Add Friend" }
                        }
                    }
                }
                if let Some(friend) = selected {
                    SplitBillPanel {
                        key: "{friend.id}",
                        is_dark,
                        friend: friend.clone(),
                        roster,
                    }
                }
            }
        }
    }
}
