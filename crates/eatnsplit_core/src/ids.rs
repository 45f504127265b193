//! Friend identifier. Opaque string: seeded friends keep their fixed numeric ids,
//! friends added at runtime get a UUID v4.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    /// Fresh collision-resistant id for a newly added friend.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FriendId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<FriendId> for String {
    fn from(id: FriendId) -> Self {
        id.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
