//! # Normalization Patterns Module
//!
//! This module contains the regex patterns used to clean raw ingredient text
//! before it is split into words.

use lazy_static::lazy_static;
use regex::Regex;

// Leading quantity (integer, decimal, fraction, mixed number, vulgar fraction or range),
// followed by a measurement unit, whitespace or the end of input. Repeated so "2 x 400 g" style
// prefixes go at once.
pub const QUANTITY_PREFIX_PATTERN: &str = r#"(?i)^(?:(?:(?:\d+\s+)?\d+\s*[/⁄]\s*\d+|\d*\.?\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])(?:\s*(?:-|–|to)\s*\d*\.?\d+)?(?:\s*(?:x\b|cups?\b|teaspoons?\b|tsp\b\.?|tablespoons?\b|tbsp\b\.?|pints?\b|quarts?\b|gallons?\b|oz\b|ounces?\b|lbs?\b\.?|pounds?\b|mg\b|grams?\b|kg\b|kilograms?\b|g\b|liters?\b|litres?\b|milliliters?\b|millilitres?\b|ml\b|l\b|slices?\b|cans?\b|bottles?\b|sticks?\b|packets?\b|packages?\b|pkg\b|bags?\b|dash(?:es)?\b|pinch(?:es)?\b|drops?\b|cubes?\b|pieces?\b|handfuls?\b|cloves?\b|bunch(?:es)?\b|sprigs?\b|heads?\b|jars?\b|stalks?\b)\s*|\s+|$))+"#;

// Anything that cannot be part of an ingredient word. Hyphens and apostrophes stay so
// compounds like "sun-dried" remain one word.
pub const PUNCTUATION_PATTERN: &str = r#"[^\p{L}\p{N}\s'\-]+"#;

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref QUANTITY_PREFIX_REGEX: Regex =
        Regex::new(QUANTITY_PREFIX_PATTERN).expect("Quantity prefix pattern should be valid");
    pub static ref PUNCTUATION_REGEX: Regex =
        Regex::new(PUNCTUATION_PATTERN).expect("Punctuation pattern should be valid");
}

/// Remove a leading quantity/unit prefix and replace punctuation with spaces
///
/// # Examples
///
/// ```rust
/// use pantry_recipes::normalize_patterns::strip_quantity_and_punctuation;
///
/// assert_eq!(strip_quantity_and_punctuation("2 cups flour").trim(), "flour");
/// assert_eq!(strip_quantity_and_punctuation("tomatoes, diced").trim(), "tomatoes  diced");
/// ```
pub fn strip_quantity_and_punctuation(text: &str) -> String {
    let without_quantity = QUANTITY_PREFIX_REGEX.replace(text, "");
    PUNCTUATION_REGEX
        .replace_all(&without_quantity, " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_quantities_with_units() {
        assert_eq!(strip_quantity_and_punctuation("500g butter"), "butter");
        assert_eq!(strip_quantity_and_punctuation("1 1/2 cups milk"), "milk");
        assert_eq!(strip_quantity_and_punctuation("½ tsp salt"), "salt");
        assert_eq!(strip_quantity_and_punctuation("2-3 cloves garlic"), "garlic");
        assert_eq!(strip_quantity_and_punctuation("2 x 400 g cans tomatoes"), "cans tomatoes");
    }

    #[test]
    fn test_unit_needs_word_boundary() {
        // "g" and "l" must not eat the start of an ingredient name
        assert_eq!(strip_quantity_and_punctuation("2 garlic cloves"), "garlic cloves");
        assert_eq!(strip_quantity_and_punctuation("3 lemons"), "lemons");
    }

    #[test]
    fn test_number_glued_to_a_word_is_kept() {
        assert_eq!(strip_quantity_and_punctuation("7up soda"), "7up soda");
        assert_eq!(strip_quantity_and_punctuation("5-spice powder"), "5-spice powder");
        assert_eq!(strip_quantity_and_punctuation("2 eggs"), "eggs");
        assert_eq!(strip_quantity_and_punctuation("3"), "");
    }

    #[test]
    fn test_keeps_inner_numbers_and_hyphens() {
        assert_eq!(strip_quantity_and_punctuation("sun-dried tomato"), "sun-dried tomato");
        assert_eq!(strip_quantity_and_punctuation("chinese 5 spice"), "chinese 5 spice");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(strip_quantity_and_punctuation("onion (red)"), "onion  red ");
        assert_eq!(strip_quantity_and_punctuation("salt."), "salt ");
    }
}
