//! # Ingredient Normalizer
//!
//! Turns free-text ingredient mentions into canonical names that can be compared
//! for equality. Two mentions refer to the same ingredient iff their canonical
//! names are equal.
//!
//! ## Pipeline
//!
//! 1. Lowercase and trim
//! 2. Drop a leading quantity/unit ("2 cups", "500g") and punctuation
//! 3. Remove qualifier words ("fresh", "diced", "boneless", ...)
//! 4. Collapse whitespace
//! 5. Resolve irregular plurals for the whole phrase, then word by word,
//!    falling back to stripping a trailing "s"
//! 6. Resolve aliases for the whole phrase ("capsicum" -> "bell pepper")
//!
//! The pass is repeated until the output is stable, which makes
//! `normalize` idempotent.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::normalizer::normalize;
//!
//! assert_eq!(normalize("2 fresh Tomatoes, diced"), "tomato");
//! assert_eq!(normalize("Capsicum"), "bell pepper");
//! ```

use log::trace;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::normalize_patterns::strip_quantity_and_punctuation;

// Upper bound on re-normalization passes; real inputs settle in two or three
const MAX_NORMALIZATION_PASSES: usize = 8;

/// Descriptive words that do not change ingredient identity
static QUALIFIERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "fresh", "dried", "frozen", "chopped", "diced", "minced", "sliced", "grated",
        "shredded", "crushed", "ground", "whole", "raw", "cooked", "canned", "boneless",
        "skinless", "organic", "large", "small", "medium", "thin", "thick", "ripe", "peeled",
    ]
    .into_iter()
    .collect()
});

/// Plurals the trailing-"s" rule gets wrong, plus words that must not lose their "s"
static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("tomatoes", "tomato");
    map.insert("potatoes", "potato");
    map.insert("mangoes", "mango");
    map.insert("anchovies", "anchovy");
    map.insert("berries", "berry");
    map.insert("blueberries", "blueberry");
    map.insert("strawberries", "strawberry");
    map.insert("raspberries", "raspberry");
    map.insert("cherries", "cherry");
    map.insert("chilies", "chili");
    map.insert("chillies", "chili");
    map.insert("radishes", "radish");
    map.insert("peaches", "peach");
    map.insert("leaves", "leaf");
    map.insert("loaves", "loaf");
    map.insert("halves", "half");
    map.insert("olives", "olive");

    // Singular words ending in "s"
    map.insert("asparagus", "asparagus");
    map.insert("couscous", "couscous");
    map.insert("hummus", "hummus");
    map.insert("citrus", "citrus");

    map
});

/// Alternate names mapped to the canonical name used by the recipe corpus.
/// Keys are written in singular, qualifier-free form.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Vegetables
    map.insert("capsicum", "bell pepper");
    map.insert("aubergine", "eggplant");
    map.insert("courgette", "zucchini");
    map.insert("spring onion", "green onion");
    map.insert("scallion", "green onion");
    map.insert("green shallot", "green onion");
    map.insert("roma tomato", "tomato");
    map.insert("cherry tomato", "tomato");
    map.insert("plum tomato", "tomato");
    map.insert("baby spinach", "spinach");

    // Proteins
    map.insert("chicken leg", "chicken thigh");
    map.insert("chicken drumstick", "chicken thigh");
    map.insert("beef", "ground beef");
    map.insert("beef mince", "ground beef");
    map.insert("prawn", "shrimp");
    map.insert("king prawn", "shrimp");
    map.insert("paneer cheese", "paneer");
    map.insert("firm tofu", "tofu");
    map.insert("silken tofu", "tofu");

    // Dairy and alternatives
    map.insert("heavy cream", "cream");
    map.insert("double cream", "cream");
    map.insert("whipping cream", "cream");
    map.insert("single cream", "cream");
    map.insert("greek yogurt", "yogurt");
    map.insert("plain yogurt", "yogurt");
    map.insert("natural yogurt", "yogurt");
    map.insert("mozzarella cheese", "mozzarella");
    map.insert("cheddar", "cheddar cheese");
    map.insert("parmesan cheese", "parmesan");
    map.insert("parmigiano", "parmesan");
    map.insert("feta", "feta cheese");
    map.insert("gruyere", "gruyere cheese");

    // Grains and carbs
    map.insert("spaghetti noodle", "spaghetti");
    map.insert("penne pasta", "penne");
    map.insert("basmati rice", "rice");
    map.insert("jasmine rice", "rice");
    map.insert("white rice", "rice");
    map.insert("brown rice", "rice");
    map.insert("long grain rice", "rice");
    map.insert("all purpose flour", "flour");
    map.insert("all-purpose flour", "flour");
    map.insert("plain flour", "flour");
    map.insert("ap flour", "flour");
    map.insert("rolled oat", "oat");
    map.insert("old fashioned oat", "oat");
    map.insert("old-fashioned oat", "oat");

    // Condiments and sauces
    map.insert("soya sauce", "soy sauce");
    map.insert("tamari", "soy sauce");
    map.insert("extra virgin olive oil", "olive oil");
    map.insert("extra-virgin olive oil", "olive oil");
    map.insert("evoo", "olive oil");
    map.insert("canola oil", "vegetable oil");
    map.insert("sunflower oil", "vegetable oil");
    map.insert("rapeseed oil", "vegetable oil");

    // Spices
    map.insert("red pepper flake", "chili flake");
    map.insert("chilli flake", "chili flake");
    map.insert("cayenne", "chili powder");
    map.insert("cayenne pepper", "chili powder");
    map.insert("coriander", "cilantro");

    // Other
    map.insert("lemon juice", "lemon");
    map.insert("lime juice", "lime");

    map
});

/// Normalize a single ingredient string to its canonical form
///
/// Never fails: empty input, or input made only of qualifiers and quantities,
/// yields an empty string, which callers treat as "no ingredient".
///
/// # Examples
///
/// ```rust
/// use pantry_recipes::normalizer::normalize;
///
/// assert_eq!(normalize("  Dried Anchovies "), "anchovy");
/// assert_eq!(normalize("fresh"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_pass(raw);

    // A pass can expose more work: "grounds" singularizes to the qualifier "ground"
    for _ in 1..MAX_NORMALIZATION_PASSES {
        let next = normalize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }

    trace!("Normalized '{}' -> '{}'", raw, current);
    current
}

/// Normalize every ingredient string in a slice
pub fn normalize_all<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|item| normalize(item.as_ref())).collect()
}

/// Check whether a word is a qualifier that normalization strips
pub fn is_qualifier(word: &str) -> bool {
    QUALIFIERS.contains(word.to_lowercase().as_str())
}

/// One run of the full pipeline
fn normalize_pass(raw: &str) -> String {
    resolve_alias(singular_form(raw))
}

/// Steps 1-5: everything except alias resolution
fn singular_form(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let cleaned = strip_quantity_and_punctuation(lowered.trim());

    let kept: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !QUALIFIERS.contains(word))
        .collect();
    let text = kept.join(" ");

    if let Some(singular) = IRREGULAR_PLURALS.get(text.as_str()) {
        return (*singular).to_string();
    }

    text.split(' ')
        .map(singularize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn singularize_word(word: &str) -> String {
    if let Some(singular) = IRREGULAR_PLURALS.get(word) {
        return (*singular).to_string();
    }
    if word.chars().count() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn resolve_alias(text: String) -> String {
    match ALIASES.get(text.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Garlic  "), "garlic");
        assert_eq!(normalize("OLIVE OIL"), "olive oil");
    }

    #[test]
    fn test_qualifiers_are_whole_words() {
        assert_eq!(normalize("fresh basil"), "basil");
        assert_eq!(normalize("boneless skinless chicken breast"), "chicken breast");
        // "ground" is a qualifier, "groundnut" is not
        assert_eq!(normalize("groundnut oil"), "groundnut oil");
        // hyphenated compounds are one word
        assert_eq!(normalize("sun-dried tomatoes"), "sun-dried tomato");
    }

    #[test]
    fn test_qualifier_removal_precedes_plural_table() {
        assert_eq!(normalize("dried anchovies"), "anchovy");
        assert_eq!(normalize("ripe tomatoes"), "tomato");
    }

    #[test]
    fn test_simple_plural_rule() {
        assert_eq!(normalize("carrots"), "carrot");
        assert_eq!(normalize("peas"), "pea");
        assert_eq!(normalize("eggs"), "egg");
        // three letters or fewer are left alone
        assert_eq!(normalize("gas"), "gas");
        // double s is left alone
        assert_eq!(normalize("swiss chard"), "swiss chard");
        // invariant words are protected by the table
        assert_eq!(normalize("couscous"), "couscous");
        assert_eq!(normalize("hummus"), "hummus");
    }

    #[test]
    fn test_plural_rule_applies_per_word() {
        assert_eq!(normalize("bay leaves"), "bay leaf");
        assert_eq!(normalize("sweet potatoes"), "sweet potato");
        assert_eq!(normalize("black beans"), "black bean");
    }

    #[test]
    fn test_alias_matches_whole_phrase_only() {
        assert_eq!(normalize("capsicum"), "bell pepper");
        assert_eq!(normalize("lemon juice"), "lemon");
        assert_eq!(normalize("spring onions"), "green onion");
        // no sub-phrase aliasing
        assert_eq!(normalize("lemon juice concentrate"), "lemon juice concentrate");
    }

    #[test]
    fn test_quantities_and_punctuation() {
        assert_eq!(normalize("2 fresh Tomatoes, diced"), "tomato");
        assert_eq!(normalize("1 1/2 cups all-purpose flour"), "flour");
        assert_eq!(normalize("3 cloves garlic, minced"), "garlic");
        assert_eq!(normalize("200g paneer cheese"), "paneer");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("fresh chopped"), "");
        assert_eq!(normalize("2 cups"), "");
    }

    #[test]
    fn test_qualifier_exposed_by_singularizing() {
        assert_eq!(normalize("coffee grounds"), "coffee");
        assert_eq!(normalize("grounds"), "");
    }

    #[test]
    fn test_is_qualifier() {
        assert!(is_qualifier("Fresh"));
        assert!(is_qualifier("boneless"));
        assert!(!is_qualifier("tomato"));
    }

    #[test]
    fn test_normalize_all() {
        assert_eq!(
            normalize_all(&["Eggs", "scallions", ""]),
            vec!["egg".to_string(), "green onion".to_string(), String::new()]
        );
    }

    #[test]
    fn test_alias_keys_are_in_singular_form() {
        for key in ALIASES.keys() {
            assert_eq!(&singular_form(key), key, "alias key '{}' is unreachable", key);
        }
    }

    #[test]
    fn test_table_targets_are_canonical() {
        for target in ALIASES.values().chain(IRREGULAR_PLURALS.values()) {
            assert_eq!(&normalize_pass(target), target, "'{}' is not canonical", target);
        }
    }

    #[test]
    fn test_idempotent_on_tricky_inputs() {
        let inputs = [
            "2 fresh Tomatoes, diced",
            "larges",
            "coffee grounds",
            "2 2 eggs",
            "fresh 2 tomatoes",
            "Ground Beef",
            "minced beef",
            "Red Pepper Flakes",
            "EVOO",
            "dried   anchovies ",
            "½ cup (packed) brown sugar",
            "İstanbul spices",
            "sun-dried tomatoes",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for '{}'", input);
        }
    }
}
