//! # Message Catalog Tests
//!
//! Checks the embedded English catalog: lookups, placeable substitution and the
//! fallback text for unknown keys.

use pantry_recipes::localization::{init_localization, t, t_args, LocalizationManager};
use std::collections::HashMap;

fn catalog() -> LocalizationManager {
    LocalizationManager::new().expect("Embedded catalog should load")
}

#[test]
fn test_plain_message() {
    assert_eq!(catalog().get_message("no-results-title", None), "No matching recipes found");
}

#[test]
fn test_unknown_key_falls_back() {
    let text = catalog().get_message("no-such-message", None);
    assert_eq!(text, "Missing translation: no-such-message");
}

#[test]
fn test_placeables_from_map() {
    let args: HashMap<&str, &str> = [("count", "5")].into_iter().collect();
    assert_eq!(
        catalog().get_message("results-header", Some(&args)),
        "Matching recipes (5 found)"
    );
}

#[test]
fn test_placeables_from_slice() {
    assert_eq!(
        catalog().get_message_with_args("recipe-not-found", &[("id", "toast")]),
        "Recipe not found: toast"
    );
}

#[test]
fn test_no_isolation_marks() {
    let text = catalog().get_message_with_args("label-total-time", &[("minutes", "25")]);
    assert_eq!(text, "25 min total");
    assert!(!text.contains('\u{2068}'));
}

#[test]
fn test_absent_argument_still_renders() {
    // Fluent reports the missing variable and keeps the rest of the pattern
    let text = catalog().get_message("score-label", None);
    assert!(text.ends_with("% match"));
}

#[test]
fn test_global_catalog() {
    init_localization().expect("Catalog should initialize");
    init_localization().expect("Second initialization should be a no-op");

    assert_eq!(t("label-have"), "You have");
    assert_eq!(t_args("score-label", &[("score", "85")]), "85% match");
}
