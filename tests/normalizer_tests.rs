//! # Normalizer Tests
//!
//! Integration tests for ingredient normalization as seen from outside the
//! crate: realistic user input, recipe ingredient names and idempotence.

use pantry_recipes::normalizer::{is_qualifier, normalize, normalize_all};

#[test]
fn test_quantity_qualifiers_and_plural_are_removed() {
    assert_eq!(normalize("2 fresh Tomatoes, diced"), "tomato");
    assert_eq!(normalize("3 cloves garlic, minced"), "garlic");
    assert_eq!(normalize("1 cup cooked rice"), "rice");
    assert_eq!(normalize("500g boneless, skinless chicken breasts"), "chicken breast");
}

#[test]
fn test_aliases_resolve_to_corpus_names() {
    assert_eq!(normalize("capsicum"), "bell pepper");
    assert_eq!(normalize("Spring Onions"), "green onion");
    assert_eq!(normalize("extra virgin olive oil"), "olive oil");
    assert_eq!(normalize("King Prawns"), "shrimp");
    assert_eq!(normalize("red pepper flakes"), "chili flake");
    assert_eq!(normalize("chili flakes"), "chili flake");
}

#[test]
fn test_ground_beef_survives_qualifier_removal() {
    // "ground" is a qualifier; the bare meat aliases back to the corpus name
    assert_eq!(normalize("ground beef"), "ground beef");
    assert_eq!(normalize("beef mince"), "ground beef");
    assert_eq!(normalize("1 lb lean beef"), "lean beef");
}

#[test]
fn test_hyphenated_words_stay_whole() {
    assert_eq!(normalize("Sun-Dried Tomatoes"), "sun-dried tomato");
    assert_eq!(normalize("all-purpose flour"), "flour");
}

#[test]
fn test_words_that_keep_their_s() {
    assert_eq!(normalize("hummus"), "hummus");
    assert_eq!(normalize("asparagus"), "asparagus");
    assert_eq!(normalize("swiss cheese"), "swiss cheese");
}

#[test]
fn test_empty_results() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("fresh, chopped"), "");
    assert_eq!(normalize("2 cups"), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "2 fresh Tomatoes, diced",
        "Capsicum",
        "red pepper flakes",
        "ground beef",
        "Coffee grounds",
        "frozen peas",
        "baby spinach leaves",
        "Sun-Dried Tomatoes",
        "1/2 tsp chilli flakes",
        "Heavy Cream",
        "glass noodles",
        "Raspberries",
        "   ",
    ];

    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "normalize not stable for '{}'", input);
    }
}

#[test]
fn test_every_corpus_ingredient_is_stable() {
    let corpus = pantry_recipes::corpus::RecipeCorpus::builtin();
    for name in corpus.all_ingredient_names() {
        let once = normalize(&name);
        assert!(!once.is_empty(), "'{}' normalizes to nothing", name);
        assert_eq!(normalize(&once), once, "normalize not stable for '{}'", name);
    }
}

#[test]
fn test_normalize_all_keeps_order() {
    assert_eq!(
        normalize_all(&["Eggs", "Milk", "2 cups flour"]),
        vec!["egg", "milk", "flour"]
    );
}

#[test]
fn test_is_qualifier_is_case_insensitive() {
    assert!(is_qualifier("Fresh"));
    assert!(!is_qualifier("tomato"));
}
