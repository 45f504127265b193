use dioxus::prelude::*;
use eatnsplit_core::{forms, AmountError, FriendRecord, Payer, Roster};
use crate::theme::{spacing, AppColors};
use crate::widgets::{Button, Card};

fn rejection_hint(e: &AmountError) -> String {
    match e {
        AmountError::ExceedsBill => "Your expense can't be more than the bill.".to_string(),
        AmountError::Invalid(_) => "Enter an amount like 12 or 12.50.".to_string(),
        AmountError::TooLarge(_) => "That amount is too large.".to_string(),
    }
}

/// Text input showing `value`. Re-created whenever `revision` changes, so after a
/// rejected edit the DOM shows the stored text again instead of what was typed.
#[component]
fn AmountInput(
    value: String,
    revision: u32,
    placeholder: String,
    style: String,
    on_text: EventHandler<String>,
) -> Element {
    rsx! {
        for rev in std::iter::once(revision) {
            input {
                key: "{rev}",
                r#type: "text",
                inputmode: "decimal",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |ev| on_text.call(ev.value()),
                style: "{style}",
            }
        }
    }
}

/// Split form for the selected friend. Mounted with `key = friend id`, so picking
/// another friend starts from a blank form.
#[component]
pub fn SplitBillPanel(is_dark: bool, friend: FriendRecord, mut roster: Signal<Roster>) -> Element {
    let mut form = use_signal(forms::SplitBillForm::default);
    let mut bill_hint = use_signal(|| Option::<String>::None);
    let mut expense_hint = use_signal(|| Option::<String>::None);
    let on_surface = AppColors::on_surface(is_dark);
    let row_style = format!(
        "display: grid; grid-template-columns: 1fr 10rem; align-items: center; gap: {}; margin-bottom: {};",
        spacing::SM,
        spacing::MD
    );
    let input_style = format!("padding: {}; border-radius: 4px; border: 1px solid #ced4da;", spacing::SM);

    let bill = form.read().bill_text().to_string();
    let user_expense = form.read().user_expense_text().to_string();
    let revision = form.read().revision();
    let hint_style = format!(
        "margin: -{} 0 {}; color: {}; font-size: 0.85rem;",
        spacing::SM,
        spacing::MD,
        AppColors::DEBT
    );
    let friend_share = form.read().friend_share_text();
    let payer = form.read().payer();

    rsx! {
        Card { is_dark,
            form {
                onsubmit: move |ev| {
                    ev.prevent_default();
                    form.read().submit(&mut roster.write());
                },
                h2 { style: "margin: 0 0 {spacing::LG}; color: {on_surface}; text-transform: uppercase;",
                    "Split a bill with {friend.name}"
                }
                div { style: "{row_style}",
                    label { style: "color: {on_surface};", "💰 Bill value" }
                    AmountInput {
                        value: bill,
                        revision,
                        placeholder: "Bill value",
                        style: input_style.clone(),
                        on_text: move |text: String| {
                            let result = form.write().set_bill(&text);
                            bill_hint.set(result.err().map(|e| rejection_hint(&e)));
                        },
                    }
                }
                if let Some(hint) = bill_hint() {
                    p { style: "{hint_style}", "{hint}" }
                }
                div { style: "{row_style}",
                    label { style: "color: {on_surface};", "🧍 Your expense" }
                    AmountInput {
                        value: user_expense,
                        revision,
                        placeholder: "Your expense",
                        style: input_style.clone(),
                        on_text: move |text: String| {
                            let result = form.write().set_user_expense(&text);
                            expense_hint.set(result.err().map(|e| rejection_hint(&e)));
                        },
                    }
                }
                if let Some(hint) = expense_hint() {
                    p { style: "{hint_style}", "{hint}" }
                }
                div { style: "{row_style}",
                    label { style: "color: {on_surface};", "👫 {friend.name}'s expense" }
                    input {
                        r#type: "text",
                        disabled: true,
                        value: "{friend_share}",
                        style: "{input_style}",
                    }
                }
                div { style: "{row_style}",
                    label { style: "color: {on_surface};", "🤑 Who is paying the bill?" }
                    select {
                        value: "{payer.as_str()}",
                        onchange: move |ev| match ev.value().parse::<Payer>() {
                            Ok(p) => form.write().set_payer(p),
                            Err(e) => tracing::warn!("{}", e),
                        },
                        style: "{input_style}",
                        option { value: "{Payer::User.as_str()}", "You" }
                        option { value: "{Payer::Friend.as_str()}", "{friend.name}" }
                    }
                }
                div { style: "display: flex; justify-content: flex-end;",
                    Button { "Split bill" }
                }
            }
        }
    }
}
