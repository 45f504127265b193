//! Roster store: the friend list, the selected friend and the add-friend panel flag.
//! Owned by the root view and passed down explicitly; every mutation is synchronous.

use crate::error::{RosterError, SeedError};
use crate::ids::FriendId;
use crate::models::FriendRecord;
use crate::seed;
use tracing::{debug, info};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    friends: Vec<FriendRecord>,
    selected: Option<FriendId>,
    add_friend_open: bool,
}

impl Roster {
    pub fn new(friends: Vec<FriendRecord>) -> Self {
        Roster {
            friends,
            selected: None,
            add_friend_open: false,
        }
    }

    /// Roster pre-filled with the bundled example friends.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed::seed_friends()?))
    }

    pub fn friends(&self) -> &[FriendRecord] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn friend(&self, id: &FriendId) -> Option<&FriendRecord> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn selected_friend(&self) -> Option<&FriendRecord> {
        self.selected.as_ref().and_then(|id| self.friend(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_add_friend_open(&self) -> bool {
        self.add_friend_open
    }

    pub fn toggle_add_friend_panel(&mut self) {
        self.add_friend_open = !self.add_friend_open;
        debug!(open = self.add_friend_open, "add friend panel toggled");
    }

    /// Select `id`, or clear the selection if it is already selected.
    /// Always closes the add-friend panel.
    pub fn select_friend(&mut self, id: &FriendId) -> Result<(), RosterError> {
        if self.friend(id).is_none() {
            return Err(RosterError::UnknownFriend(id.clone()));
        }
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
        self.add_friend_open = false;
        debug!(friend = %id, selected = self.selected.is_some(), "selection toggled");
        Ok(())
    }

    /// Append a friend with a zero balance. Nothing changes if either field is empty.
    pub fn add_friend(&mut self, name: &str, avatar_url: &str) -> Result<FriendId, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if avatar_url.is_empty() {
            return Err(RosterError::EmptyAvatar);
        }
        let friend = FriendRecord::new(name, avatar_url);
        let id = friend.id.clone();
        info!(friend = %id, name, "friend added");
        self.friends.push(friend);
        Ok(id)
    }

    /// Add `delta` (cents) to the selected friend's balance and clear the selection.
    /// Returns the friend's new balance. On overflow nothing changes.
    pub fn apply_split(&mut self, delta: i64) -> Result<i64, RosterError> {
        let id = self.selected.clone().ok_or(RosterError::NoSelection)?;
        let friend = self
            .friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| RosterError::UnknownFriend(id.clone()))?;
        let balance = friend
            .balance
            .checked_add(delta)
            .ok_or_else(|| RosterError::Overflow(id.clone()))?;
        friend.balance = balance;
        self.selected = None;
        info!(friend = %id, delta, balance, "bill split applied");
        Ok(balance)
    }
}
