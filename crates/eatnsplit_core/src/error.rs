use crate::ids::FriendId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("friend name is empty")]
    EmptyName,

    #[error("avatar url is empty")]
    EmptyAvatar,

    #[error("no friend is selected")]
    NoSelection,

    #[error("unknown friend: {0}")]
    UnknownFriend(FriendId),

    #[error("balance of {0} would overflow")]
    Overflow(FriendId),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate friend id in seed roster: {0}")]
    DuplicateId(FriendId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("not a non-negative amount with at most two decimals: {0:?}")]
    Invalid(String),

    #[error("amount too large: {0:?}")]
    TooLarge(String),

    #[error("expense exceeds the bill")]
    ExceedsBill,
}
