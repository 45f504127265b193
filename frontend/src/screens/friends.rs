use dioxus::prelude::*;
use eatnsplit_core::{FriendId, FriendRecord, Roster};
use crate::theme::{spacing, AppColors};
use crate::widgets::{Avatar, Button, Card};

/// One row per friend, in roster order. Toggling a row selects or deselects that friend.
#[component]
pub fn FriendList(is_dark: bool, mut roster: Signal<Roster>) -> Element {
    let friends = roster.read().friends().to_vec();
    let selected = roster.read().selected_id().cloned();

    rsx! {
        ul { style: "list-style: none; padding: 0; margin: 0 0 {spacing::MD} 0;",
            for friend in friends {
                FriendRow {
                    key: "{friend.id}",
                    is_dark,
                    is_selected: selected.as_ref() == Some(&friend.id),
                    friend: friend.clone(),
                    on_select: move |id: FriendId| {
                        if let Err(e) = roster.write().select_friend(&id) {
                            tracing::warn!("select failed: {}", e);
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn FriendRow(
    is_dark: bool,
    friend: FriendRecord,
    is_selected: bool,
    on_select: EventHandler<FriendId>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let message = friend.balance_message();
    let message_color = AppColors::balance(message.tone, is_dark);
    let id = friend.id.clone();

    rsx! {
        li {
            Card { is_dark, highlighted: is_selected,
                div { style: "display: grid; grid-template-columns: 48px 1fr auto; column-gap: {spacing::MD}; align-items: center;",
                    Avatar { src: friend.avatar_url.clone(), alt: friend.name.clone() }
                    h3 { style: "margin: 0; color: {on_surface};", "{friend.name}" }
                    div { style: "grid-row: span 2;",
                        Button {
                            onclick: move |_| on_select.call(id.clone()),
                            if is_selected { "Close" } else { "Select" }
                        }
                    }
                    p { style: "margin: {spacing::XS} 0 0; color: {message_color};", "{message.text}" }
                }
            }
        }
    }
}
