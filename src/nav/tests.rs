#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{active_index, is_active, DockState, MatchType, NavItem};

fn dock_items() -> Vec<NavItem> {
    vec![
        NavItem::exact("Home", "/"),
        NavItem::prefix("Work", "/work"),
        NavItem::prefix("Lab", "/lab"),
    ]
}

#[test]
fn test_exact_matches_only_equal_path() {
    assert!(is_active("/stack", "/stack", MatchType::Exact));
    assert!(!is_active("/stack/", "/stack", MatchType::Exact));
    assert!(!is_active("/stack/go", "/stack", MatchType::Exact));
}

#[test]
fn test_root_exact_matches_only_root() {
    assert!(is_active("/", "/", MatchType::Exact));
    assert!(!is_active("/work", "/", MatchType::Exact));
    assert!(!is_active("", "/", MatchType::Exact));
}

#[test]
fn test_prefix_matches_self_and_descendants() {
    assert!(is_active("/work", "/work", MatchType::Prefix));
    assert!(is_active("/work/foo", "/work", MatchType::Prefix));
    assert!(is_active("/work/foo/bar", "/work", MatchType::Prefix));
}

#[test]
fn test_prefix_requires_segment_boundary() {
    assert!(!is_active("/workshop", "/work", MatchType::Prefix));
    assert!(!is_active("/wor", "/work", MatchType::Prefix));
}

#[test]
fn test_trailing_slash_is_a_prefix_descendant() {
    assert!(is_active("/work/", "/work", MatchType::Prefix));
}

#[test]
fn test_empty_path_matches_only_empty_item() {
    assert!(is_active("", "", MatchType::Exact));
    assert!(is_active("", "", MatchType::Prefix));
    assert!(!is_active("", "/", MatchType::Prefix));
}

#[test]
fn test_active_index_scenario() {
    let items = dock_items();
    assert_eq!(active_index("/work/foo", &items), Some(1));
    assert_eq!(active_index("/", &items), Some(0));
    assert_eq!(active_index("/other", &items), None);
    assert_eq!(active_index("/lab", &items), Some(2));
}

#[test]
fn test_active_index_first_declared_wins() {
    let items = vec![
        NavItem::prefix("All", "/"),
        NavItem::prefix("Work", "/work"),
    ];
    // "/work" is not under "/" + "/" so the root prefix does not claim it
    assert_eq!(active_index("/work", &items), Some(1));

    let items = vec![
        NavItem::prefix("Work", "/work"),
        NavItem::prefix("Work detail", "/work/foo"),
    ];
    assert_eq!(active_index("/work/foo", &items), Some(0));
}

#[test]
fn test_active_index_empty_items() {
    assert_eq!(active_index("/", &[]), None);
}

#[test]
fn test_match_type_serde_names() {
    let item: NavItem = serde_json::from_str(r#"{"label":"Work","path":"/work","match":"prefix"}"#)
        .expect("parse nav item");
    assert_eq!(item.match_type, MatchType::Prefix);

    let item: NavItem =
        serde_json::from_str(r#"{"label":"Home","path":"/"}"#).expect("parse nav item");
    assert_eq!(item.match_type, MatchType::Exact);
    assert_eq!(MatchType::Prefix.to_string(), "prefix");
}

#[test]
fn test_dock_state_flags_and_indicator() {
    let items = dock_items();
    let state = DockState::for_path("/lab/bar-42", &items);

    assert_eq!(state.active_index(), Some(2));
    assert!(state.has_indicator());
    assert!(!state.is_item_active(0));
    assert!(!state.is_item_active(1));
    assert!(state.is_item_active(2));
    assert!(!state.is_item_active(99));
    assert_eq!(state.active_label(&items), Some("Lab"));
    assert_eq!(state.len(), 3);
}

#[test]
fn test_dock_state_overlapping_items_flag_independently() {
    let items = vec![
        NavItem::prefix("Work", "/work"),
        NavItem::exact("Featured", "/work/featured"),
    ];
    let state = DockState::for_path("/work/featured", &items);

    assert_eq!(state.active_index(), Some(0));
    assert!(state.is_item_active(0));
    assert!(state.is_item_active(1));
}

#[test]
fn test_dock_state_without_match() {
    let items = dock_items();
    let state = DockState::for_path("/nowhere", &items);
    assert!(!state.has_indicator());
    assert_eq!(state.active_label(&items), None);
    assert!((0..items.len()).all(|i| !state.is_item_active(i)));
}
