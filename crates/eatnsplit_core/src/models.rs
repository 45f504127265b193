use crate::config::CURRENCY_SYMBOL;
use crate::ids::FriendId;
use crate::money::format_magnitude;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FriendRecord {
    pub id: FriendId,
    pub name: String,
    pub avatar_url: String,
    /// Net balance in cents: positive = they owe you, negative = you owe them
    #[serde(default)]
    pub balance: i64,
}

impl FriendRecord {
    pub fn new(name: &str, avatar_url: &str) -> Self {
        FriendRecord {
            id: FriendId::generate(),
            name: name.to_string(),
            avatar_url: avatar_url.to_string(),
            balance: 0,
        }
    }

    pub fn balance_message(&self) -> BalanceMessage {
        BalanceMessage::for_friend(self)
    }
}

/// Who paid the bill being split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    /// Value used by the payer `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::User => "user",
            Payer::Friend => "friend",
        }
    }
}

impl FromStr for Payer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Payer::User),
            "friend" => Ok(Payer::Friend),
            other => Err(format!("Invalid payer: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceTone {
    /// Friend owes the user.
    Credit,
    /// User owes the friend.
    Debt,
    Even,
}

/// Row text describing where the user stands with one friend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceMessage {
    pub tone: BalanceTone,
    pub text: String,
}

impl BalanceMessage {
    pub fn for_friend(friend: &FriendRecord) -> Self {
        let name = &friend.name;
        let balance = friend.balance;
        if balance > 0 {
            BalanceMessage {
                tone: BalanceTone::Credit,
                text: format!("{} owes you {}{}", name, format_magnitude(balance), CURRENCY_SYMBOL),
            }
        } else if balance < 0 {
            BalanceMessage {
                tone: BalanceTone::Debt,
                text: format!("You owe {} {}{}", name, format_magnitude(balance), CURRENCY_SYMBOL),
            }
        } else {
            BalanceMessage {
                tone: BalanceTone::Even,
                text: format!("You and {} are even", name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, balance: i64) -> FriendRecord {
        FriendRecord {
            id: FriendId::from("f1"),
            name: name.to_string(),
            avatar_url: "https://i.pravatar.cc/48".to_string(),
            balance,
        }
    }

    #[test]
    fn positive_balance_reads_as_credit() {
        let msg = friend("Sarah", 2000).balance_message();
        assert_eq!(msg.tone, BalanceTone::Credit);
        assert_eq!(msg.text, "Sarah owes you 20€");
    }

    #[test]
    fn negative_balance_shows_absolute_amount() {
        let msg = friend("Clark", -750).balance_message();
        assert_eq!(msg.tone, BalanceTone::Debt);
        assert_eq!(msg.text, "You owe Clark 7.50€");
    }

    #[test]
    fn zero_balance_is_even() {
        let msg = friend("Anthony", 0).balance_message();
        assert_eq!(msg.tone, BalanceTone::Even);
        assert_eq!(msg.text, "You and Anthony are even");
    }

    #[test]
    fn payer_parses_select_values() {
        assert_eq!("user".parse::<Payer>(), Ok(Payer::User));
        assert_eq!("friend".parse::<Payer>(), Ok(Payer::Friend));
        assert!("nobody".parse::<Payer>().is_err());
        assert_eq!(Payer::default(), Payer::User);
    }
}
