//! Roster store: seeding, selection, add-friend panel, adding friends, applying splits.

use eatnsplit_core::{FriendId, FriendRecord, Roster, RosterError};
use pretty_assertions::assert_eq;

fn clark() -> FriendId {
    FriendId::from("118836")
}

fn sarah() -> FriendId {
    FriendId::from("933372")
}

fn seeded() -> Roster {
    Roster::seeded().expect("bundled seed roster parses")
}

#[test]
fn seeded_roster_has_three_example_friends_in_order() {
    let roster = seeded();
    let names: Vec<&str> = roster.friends().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Clark", "Sarah", "Anthony"]);
    let balances: Vec<i64> = roster.friends().iter().map(|f| f.balance).collect();
    assert_eq!(balances, vec![-700, 2000, 0]);
    assert!(roster.selected_id().is_none());
    assert!(!roster.is_add_friend_open());
}

#[test]
fn toggle_add_friend_panel_flips_flag_only() {
    let mut roster = seeded();
    roster.select_friend(&clark()).unwrap();

    roster.toggle_add_friend_panel();
    assert!(roster.is_add_friend_open());
    assert_eq!(roster.selected_id(), Some(&clark()));

    roster.toggle_add_friend_panel();
    assert!(!roster.is_add_friend_open());
    assert_eq!(roster.len(), 3);
}

#[test]
fn selecting_unselected_friend_selects_it_and_closes_panel() {
    let mut roster = seeded();
    roster.toggle_add_friend_panel();

    roster.select_friend(&sarah()).unwrap();

    assert_eq!(roster.selected_id(), Some(&sarah()));
    assert_eq!(roster.selected_friend().map(|f| f.name.as_str()), Some("Sarah"));
    assert!(!roster.is_add_friend_open());
}

#[test]
fn selecting_selected_friend_clears_selection() {
    let mut roster = seeded();
    roster.select_friend(&sarah()).unwrap();
    roster.select_friend(&sarah()).unwrap();
    assert!(roster.selected_id().is_none());
}

#[test]
fn selecting_another_friend_switches_selection() {
    let mut roster = seeded();
    roster.select_friend(&sarah()).unwrap();
    roster.select_friend(&clark()).unwrap();
    assert!(roster.is_selected(&clark()));
    assert!(!roster.is_selected(&sarah()));
}

#[test]
fn selecting_unknown_friend_is_an_error_and_changes_nothing() {
    let mut roster = seeded();
    roster.toggle_add_friend_panel();
    let before = roster.clone();

    let err = roster.select_friend(&FriendId::from("nope")).unwrap_err();

    assert_eq!(err, RosterError::UnknownFriend(FriendId::from("nope")));
    assert_eq!(roster, before);
}

#[test]
fn add_friend_appends_record_with_zero_balance() {
    let mut roster = seeded();
    let id = roster.add_friend("Dana", "https://i.pravatar.cc/48?=Dana").unwrap();

    assert_eq!(roster.len(), 4);
    let added = roster.friends().last().unwrap();
    assert_eq!(added.id, id);
    assert_eq!(added.name, "Dana");
    assert_eq!(added.avatar_url, "https://i.pravatar.cc/48?=Dana");
    assert_eq!(added.balance, 0);
}

#[test]
fn add_friend_generates_unique_ids() {
    let mut roster = seeded();
    let a = roster.add_friend("Dana", "x").unwrap();
    let b = roster.add_friend("Dana", "x").unwrap();
    assert_ne!(a, b);
    assert_eq!(roster.len(), 5);
}

#[test]
fn add_friend_with_empty_field_leaves_roster_unchanged() {
    let mut roster = seeded();
    let before = roster.clone();

    assert_eq!(roster.add_friend("", "https://i.pravatar.cc/48"), Err(RosterError::EmptyName));
    assert_eq!(roster.add_friend("Dana", ""), Err(RosterError::EmptyAvatar));

    assert_eq!(roster, before);
}

#[test]
fn apply_split_adds_delta_and_clears_selection() {
    let mut roster = seeded();
    roster.select_friend(&clark()).unwrap();

    let balance = roster.apply_split(6000).unwrap();

    assert_eq!(balance, 5300);
    assert_eq!(roster.friend(&clark()).unwrap().balance, 5300);
    assert!(roster.selected_id().is_none());
    // Other friends untouched.
    assert_eq!(roster.friend(&sarah()).unwrap().balance, 2000);
}

#[test]
fn apply_split_negative_delta() {
    let mut roster = seeded();
    roster.select_friend(&sarah()).unwrap();
    assert_eq!(roster.apply_split(-3000), Ok(-1000));
}

#[test]
fn apply_split_overflowing_balance_changes_nothing() {
    let mut roster = seeded();
    roster.select_friend(&sarah()).unwrap();
    let before = roster.clone();

    assert_eq!(roster.apply_split(i64::MAX), Err(RosterError::Overflow(sarah())));

    assert_eq!(roster, before);
    assert!(roster.is_selected(&sarah()));
}

#[test]
fn apply_split_underflowing_balance_changes_nothing() {
    let mut roster = seeded();
    roster.select_friend(&clark()).unwrap();
    assert_eq!(roster.apply_split(i64::MIN), Err(RosterError::Overflow(clark())));
    assert_eq!(roster.friend(&clark()).unwrap().balance, -700);
}

#[test]
fn apply_split_up_to_the_limit_is_accepted() {
    let mut roster = seeded();
    roster.select_friend(&sarah()).unwrap();
    assert_eq!(roster.apply_split(i64::MAX - 2000), Ok(i64::MAX));
}

#[test]
fn apply_split_without_selection_is_rejected() {
    let mut roster = seeded();
    let before = roster.clone();
    assert_eq!(roster.apply_split(10), Err(RosterError::NoSelection));
    assert_eq!(roster, before);
}

#[test]
fn empty_roster_from_new() {
    let roster = Roster::new(Vec::<FriendRecord>::new());
    assert!(roster.is_empty());
    assert!(roster.selected_friend().is_none());
}
