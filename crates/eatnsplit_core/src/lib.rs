//! Eat n Split core: friend roster, split-bill arithmetic and form state.
//! No renderer dependency, so everything here is testable with plain `cargo test`.

pub mod config;
pub mod error;
pub mod forms;
pub mod ids;
pub mod models;
pub mod money;
pub mod roster;
pub mod seed;

pub use error::{AmountError, RosterError, SeedError};
pub use forms::{AddFriendForm, SplitBillForm};
pub use ids::FriendId;
pub use models::{BalanceMessage, BalanceTone, FriendRecord, Payer};
pub use roster::Roster;
