//! Example friends the roster starts with, embedded at build time.

use crate::error::SeedError;
use crate::models::FriendRecord;
use std::collections::HashSet;

const SEED_FRIENDS_JSON: &str = include_str!("../assets/seed_friends.json");

/// Parse a roster from JSON, rejecting duplicate ids.
pub fn parse_friends(json: &str) -> Result<Vec<FriendRecord>, SeedError> {
    let friends: Vec<FriendRecord> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for f in &friends {
        if !seen.insert(f.id.clone()) {
            return Err(SeedError::DuplicateId(f.id.clone()));
        }
    }
    Ok(friends)
}

pub fn seed_friends() -> Result<Vec<FriendRecord>, SeedError> {
    parse_friends(SEED_FRIENDS_JSON)
}
