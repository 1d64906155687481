//! # Ingredient Input Module
//!
//! Manages the list of ingredients a user has entered and filters typeahead
//! suggestions from the corpus' ingredient names.
//!
//! Duplicates are detected by canonical name, so "Tomatoes" and "tomato"
//! count as the same entry. The raw (trimmed) text is what gets stored.

use log::debug;
use std::collections::HashSet;

use crate::normalizer::normalize;

/// The user's ordered list of available ingredients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PantryList {
    items: Vec<String>,
}

impl PantryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient
    ///
    /// Returns `false` if the text normalizes to nothing or an ingredient with
    /// the same canonical name is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_recipes::ingredient_input::PantryList;
    ///
    /// let mut pantry = PantryList::new();
    /// assert!(pantry.add("Tomatoes"));
    /// assert!(!pantry.add("fresh tomato"));
    /// assert!(!pantry.add("   "));
    /// assert_eq!(pantry.as_slice(), ["Tomatoes"]);
    /// ```
    pub fn add(&mut self, raw: &str) -> bool {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            debug!("Ignoring ingredient '{}' with empty canonical form", raw);
            return false;
        }
        if self.contains_canonical(&canonical) {
            debug!("Ingredient '{}' already present as '{}'", raw, canonical);
            return false;
        }
        self.items.push(raw.trim().to_string());
        true
    }

    /// Add every comma-separated part of `text`, returning how many were added
    pub fn add_delimited(&mut self, text: &str) -> usize {
        text.split(',').filter(|part| self.add(part)).count()
    }

    /// Remove the ingredient at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove every ingredient
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether an ingredient with this canonical name is present
    pub fn contains_canonical(&self, canonical: &str) -> bool {
        self.items.iter().any(|item| normalize(item) == canonical)
    }

    /// Canonical names of every entry
    pub fn canonical_set(&self) -> HashSet<String> {
        self.items.iter().map(|item| normalize(item)).collect()
    }

    /// The raw entries in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter ingredient names for a typeahead query
///
/// The query is trimmed and lowercased; an empty query yields nothing. A name
/// is suggested when it contains the query and its canonical form is not
/// already among `current`. Results keep the order of `names` and are capped
/// at `limit`.
///
/// # Examples
///
/// ```rust
/// use pantry_recipes::ingredient_input::suggest;
///
/// let names = vec!["cherry tomatoes".to_string(), "tomato paste".to_string(), "onion".to_string()];
/// let current = vec!["tomatoes".to_string()];
/// assert_eq!(suggest(" TOMATO", &names, &current, 8), vec!["tomato paste"]);
/// ```
pub fn suggest<S: AsRef<str>>(
    query: &str,
    names: &[String],
    current: &[S],
    limit: usize,
) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let existing: HashSet<String> = current.iter().map(|item| normalize(item.as_ref())).collect();

    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .filter(|name| !existing.contains(&normalize(name)))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_trims_and_dedupes() {
        let mut pantry = PantryList::new();
        assert!(pantry.add("  Garlic "));
        assert!(!pantry.add("garlic"));
        assert!(pantry.add("scallions"));
        assert!(!pantry.add("spring onion"));
        assert_eq!(pantry.as_slice(), ["Garlic", "scallions"]);
    }

    #[test]
    fn test_add_delimited() {
        let mut pantry = PantryList::new();
        assert_eq!(pantry.add_delimited("eggs, milk,, eggs ,flour"), 3);
        assert_eq!(pantry.as_slice(), ["eggs", "milk", "flour"]);
    }

    #[test]
    fn test_remove() {
        let mut pantry = PantryList::new();
        pantry.add("eggs");
        pantry.add("milk");
        assert_eq!(pantry.remove(0), Some("eggs".to_string()));
        assert_eq!(pantry.remove(5), None);
        assert_eq!(pantry.len(), 1);
        pantry.clear();
        assert!(pantry.is_empty());
    }

    #[test]
    fn test_canonical_set() {
        let mut pantry = PantryList::new();
        pantry.add("Capsicum");
        pantry.add("2 eggs");
        let set = pantry.canonical_set();
        assert!(set.contains("bell pepper"));
        assert!(set.contains("egg"));
    }

    #[test]
    fn test_suggest_empty_query() {
        let all = names(&["garlic"]);
        assert!(suggest("   ", &all, &Vec::<String>::new(), 8).is_empty());
    }

    #[test]
    fn test_suggest_is_case_insensitive_substring() {
        let all = names(&["olive oil", "olives", "sesame oil", "garlic"]);
        assert_eq!(
            suggest("OIL", &all, &Vec::<String>::new(), 8),
            vec!["olive oil", "sesame oil"]
        );
    }

    #[test]
    fn test_suggest_excludes_present_by_canonical_name() {
        let all = names(&["olive oil", "olives", "sesame oil"]);
        assert_eq!(suggest("ol", &all, &["EVOO"], 8), vec!["olives"]);
    }

    #[test]
    fn test_suggest_respects_limit() {
        let all = names(&["rice", "rice noodles", "rice vinegar", "arborio rice"]);
        assert_eq!(
            suggest("rice", &all, &Vec::<String>::new(), 2),
            vec!["rice", "rice noodles"]
        );
    }
}
