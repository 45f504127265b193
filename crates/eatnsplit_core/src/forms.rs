//! Local input state for the add-friend and split-bill forms.
//!
//! Each form lives only as long as its view is mounted. Submitting with incomplete input
//! is a silent no-op: the methods return `None` and log why at `debug`.

use crate::config::{personalised_avatar, DEFAULT_AVATAR_URL};
use crate::error::AmountError;
use crate::ids::FriendId;
use crate::models::Payer;
use crate::money::{format_amount, parse_amount};
use crate::roster::Roster;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub avatar_url: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        AddFriendForm {
            name: String::new(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl AddFriendForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_avatar_url(&mut self, url: impl Into<String>) {
        self.avatar_url = url.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the friend to `roster` and reset the fields. Empty fields leave both untouched.
    pub fn submit(&mut self, roster: &mut Roster) -> Option<FriendId> {
        if self.name.is_empty() || self.avatar_url.is_empty() {
            debug!("add friend declined: empty field");
            return None;
        }
        let avatar = personalised_avatar(&self.avatar_url, &self.name);
        match roster.add_friend(&self.name, &avatar) {
            Ok(id) => {
                self.reset();
                Some(id)
            }
            Err(e) => {
                debug!(error = %e, "add friend declined");
                None
            }
        }
    }
}

/// Raw text as typed plus its parsed value in cents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AmountField {
    text: String,
    cents: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitBillForm {
    bill: AmountField,
    user_expense: AmountField,
    payer: Payer,
    revision: u32,
}

impl SplitBillForm {
    /// Bill in cents.
    pub fn bill(&self) -> Option<i64> {
        self.bill.cents
    }

    /// User's share in cents.
    pub fn user_expense(&self) -> Option<i64> {
        self.user_expense.cents
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn bill_text(&self) -> &str {
        &self.bill.text
    }

    pub fn user_expense_text(&self) -> &str {
        &self.user_expense.text
    }

    pub fn friend_share_text(&self) -> String {
        self.friend_share().map(format_amount).unwrap_or_default()
    }

    /// Bumped on every rejected edit. Views key their inputs on it so the stored
    /// text replaces whatever was typed.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    fn reject(&mut self, e: AmountError) -> Result<(), AmountError> {
        self.revision = self.revision.wrapping_add(1);
        debug!(error = %e, "amount input rejected");
        Err(e)
    }

    /// On error the previous value is kept.
    pub fn set_bill(&mut self, text: &str) -> Result<(), AmountError> {
        match parse_amount(text) {
            Ok(cents) => {
                self.bill = AmountField { text: text.to_string(), cents };
                Ok(())
            }
            Err(e) => self.reject(e),
        }
    }

    /// On error the previous value is kept. A missing bill counts as 0, so the
    /// bill has to be entered first.
    pub fn set_user_expense(&mut self, text: &str) -> Result<(), AmountError> {
        let cents = match parse_amount(text) {
            Ok(cents) => cents,
            Err(e) => return self.reject(e),
        };
        if cents.unwrap_or(0) > self.bill.cents.unwrap_or(0) {
            return self.reject(AmountError::ExceedsBill);
        }
        self.user_expense = AmountField { text: text.to_string(), cents };
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// `bill - user_expense`, only when both are entered and non-zero.
    pub fn friend_share(&self) -> Option<i64> {
        match (self.bill.cents, self.user_expense.cents) {
            (Some(bill), Some(expense)) if bill != 0 && expense != 0 => Some(bill - expense),
            _ => None,
        }
    }

    /// Signed amount (cents) to add to the friend's balance for the current input.
    pub fn delta(&self) -> Option<i64> {
        let share = self.friend_share()?;
        let expense = self.user_expense.cents?;
        Some(match self.payer {
            Payer::User => share,
            Payer::Friend => -expense,
        })
    }

    /// Apply the split to the selected friend. Returns the delta applied.
    pub fn submit(&self, roster: &mut Roster) -> Option<i64> {
        let Some(delta) = self.delta() else {
            debug!("split declined: bill or expense missing");
            return None;
        };
        match roster.apply_split(delta) {
            Ok(_) => Some(delta),
            Err(e) => {
                debug!(error = %e, "split declined");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_render_as_empty_text() {
        let form = SplitBillForm::default();
        assert_eq!(form.bill_text(), "");
        assert_eq!(form.user_expense_text(), "");
        assert_eq!(form.friend_share_text(), "");
        assert_eq!(form.revision(), 0);
    }

    #[test]
    fn partial_decimal_text_is_kept_as_typed() {
        let mut form = SplitBillForm::default();
        form.set_bill("12.").unwrap();
        assert_eq!(form.bill_text(), "12.");
        assert_eq!(form.bill(), Some(1200));
    }
}
