//! # Substitution Resolver
//!
//! Hand-curated table of stand-ins for ingredients a recipe needs but the user
//! does not have. Keys and replacements are canonical names (see
//! [`crate::normalizer`]). The table is asymmetric in places:
//! mushroom lists zucchini, zucchini does not list mushroom.

use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::recipe_model::Substitution;

/// A declared replacement for one ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionCandidate {
    /// Canonical name of the replacement
    pub replacement: String,
    /// Similarity to the original (0.0 to 1.0)
    pub similarity: f64,
}

/// Mapping from a canonical ingredient to its ordered replacement candidates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionTable {
    entries: HashMap<String, Vec<SubstitutionCandidate>>,
}

static BUILTIN_TABLE: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    let mut table = SubstitutionTable::new();

    // Dairy
    table.insert("butter", &[("margarine", 0.9), ("olive oil", 0.7), ("coconut oil", 0.65)]);
    table.insert(
        "milk",
        &[("oat milk", 0.85), ("almond milk", 0.8), ("soy milk", 0.8), ("coconut milk", 0.7)],
    );
    table.insert("cream", &[("coconut cream", 0.8), ("coconut milk", 0.7), ("milk", 0.6)]);
    table.insert("yogurt", &[("sour cream", 0.85), ("coconut yogurt", 0.75)]);
    table.insert("sour cream", &[("yogurt", 0.85), ("cream cheese", 0.7)]);
    table.insert("mozzarella", &[("provolone", 0.8), ("cheddar cheese", 0.6)]);
    table.insert("cheddar cheese", &[("mozzarella", 0.65), ("gruyere cheese", 0.7)]);
    table.insert("feta cheese", &[("goat cheese", 0.8), ("ricotta", 0.6)]);
    table.insert("gruyere cheese", &[("swiss cheese", 0.85), ("cheddar cheese", 0.6)]);
    table.insert("parmesan", &[("pecorino", 0.85), ("nutritional yeast", 0.5)]);

    // Proteins
    table.insert(
        "chicken breast",
        &[("chicken thigh", 0.9), ("turkey breast", 0.8), ("tofu", 0.5)],
    );
    table.insert("chicken thigh", &[("chicken breast", 0.9), ("turkey thigh", 0.8)]);
    // "ground" is a qualifier, so ground turkey/pork/chicken canonicalize to the bare meat
    table.insert("ground beef", &[("turkey", 0.85), ("pork", 0.8), ("chicken", 0.75)]);
    table.insert("beef sirloin", &[("ground beef", 0.65), ("chicken breast", 0.5)]);
    table.insert("bacon", &[("pancetta", 0.9), ("turkey bacon", 0.8)]);
    table.insert("pancetta", &[("bacon", 0.9)]);
    table.insert("shrimp", &[("chicken breast", 0.5), ("tofu", 0.45)]);
    table.insert("salmon", &[("trout", 0.85), ("tuna", 0.7)]);
    table.insert("egg", &[("flax egg", 0.6), ("chia egg", 0.6), ("banana", 0.4)]);
    table.insert("tofu", &[("paneer", 0.7), ("tempeh", 0.75)]);
    table.insert("paneer", &[("tofu", 0.7), ("halloumi", 0.75)]);

    // Grains and carbs
    table.insert("spaghetti", &[("penne", 0.85), ("linguine", 0.9), ("rice noodle", 0.6)]);
    table.insert("penne", &[("spaghetti", 0.85), ("macaroni", 0.9)]);
    table.insert("macaroni", &[("penne", 0.9), ("spaghetti", 0.8)]);
    table.insert("rice noodle", &[("spaghetti", 0.6), ("ramen noodle", 0.7)]);
    table.insert("ramen noodle", &[("rice noodle", 0.7), ("spaghetti", 0.55)]);
    table.insert("rice", &[("quinoa", 0.75), ("couscous", 0.7), ("bulgur wheat", 0.65)]);
    table.insert("flour", &[("almond flour", 0.6), ("wheat flour", 0.85)]);
    table.insert("bread", &[("pita bread", 0.75), ("tortilla", 0.6)]);
    table.insert("pita bread", &[("bread", 0.75), ("tortilla", 0.7), ("naan", 0.8)]);
    table.insert("tortilla", &[("pita bread", 0.7), ("bread", 0.6)]);

    // Vegetables
    table.insert("bell pepper", &[("poblano pepper", 0.7), ("zucchini", 0.5)]);
    table.insert("broccoli", &[("cauliflower", 0.8), ("broccolini", 0.9)]);
    table.insert("spinach", &[("kale", 0.75), ("swiss chard", 0.8)]);
    table.insert("zucchini", &[("yellow squash", 0.9), ("eggplant", 0.6)]);
    table.insert("eggplant", &[("zucchini", 0.6), ("portobello mushroom", 0.5)]);
    table.insert("mushroom", &[("zucchini", 0.4)]);
    table.insert("lettuce", &[("romaine lettuce", 0.9), ("spinach", 0.7)]);
    table.insert("romaine lettuce", &[("lettuce", 0.9), ("spinach", 0.7)]);
    table.insert("carrot", &[("sweet potato", 0.5), ("parsnip", 0.7)]);
    table.insert("potato", &[("sweet potato", 0.75), ("cauliflower", 0.5)]);
    table.insert("cucumber", &[("zucchini", 0.5), ("celery", 0.4)]);
    table.insert("tomato", &[("sun-dried tomato", 0.6)]);

    // Condiments and sauces
    table.insert("soy sauce", &[("coconut amino", 0.8)]);
    table.insert("fish sauce", &[("soy sauce", 0.6)]);
    table.insert("tomato sauce", &[("tomato", 0.75), ("tomato paste", 0.65)]);
    table.insert("mayonnaise", &[("yogurt", 0.55), ("sour cream", 0.5)]);
    table.insert("tahini", &[("peanut butter", 0.7), ("almond butter", 0.7)]);
    table.insert(
        "peanut butter",
        &[("almond butter", 0.85), ("tahini", 0.7), ("cashew butter", 0.85)],
    );

    // Sweeteners
    table.insert("sugar", &[("honey", 0.8), ("maple syrup", 0.75)]);
    table.insert("honey", &[("maple syrup", 0.85), ("agave", 0.8), ("sugar", 0.7)]);
    table.insert("maple syrup", &[("honey", 0.85), ("agave", 0.8)]);

    // Herbs and spices
    table.insert("basil", &[("oregano", 0.65), ("parsley", 0.6)]);
    table.insert("cilantro", &[("parsley", 0.7), ("basil", 0.5)]);
    table.insert("parsley", &[("cilantro", 0.7), ("chive", 0.5)]);
    table.insert("oregano", &[("basil", 0.65), ("thyme", 0.7)]);
    table.insert("thyme", &[("oregano", 0.7), ("rosemary", 0.6)]);
    table.insert("garam masala", &[("curry powder", 0.7)]);
    table.insert("curry powder", &[("garam masala", 0.7)]);
    table.insert("green curry paste", &[("red curry paste", 0.8)]);
    table.insert("gochujang", &[("sriracha", 0.6), ("chili paste", 0.7)]);

    // Acids and citrus
    table.insert("lemon", &[("lime", 0.85), ("vinegar", 0.5)]);
    table.insert("lime", &[("lemon", 0.85)]);
    table.insert("balsamic vinegar", &[("red wine vinegar", 0.7), ("lemon", 0.5)]);
    table.insert(
        "red wine vinegar",
        &[("balsamic vinegar", 0.7), ("white wine vinegar", 0.85), ("lemon", 0.5)],
    );

    // Oils
    table.insert("olive oil", &[("vegetable oil", 0.75), ("butter", 0.6), ("coconut oil", 0.65)]);
    table.insert("sesame oil", &[("vegetable oil", 0.5), ("peanut oil", 0.7)]);
    table.insert("vegetable oil", &[("olive oil", 0.75), ("coconut oil", 0.7)]);
    table.insert("coconut milk", &[("cream", 0.6), ("almond milk", 0.55)]);

    // Nuts and legumes
    table.insert("peanut", &[("cashew", 0.8), ("almond", 0.7)]);
    table.insert("chickpea", &[("white bean", 0.75), ("lentil", 0.6)]);
    table.insert("black bean", &[("kidney bean", 0.85), ("pinto bean", 0.85)]);
    table.insert("red lentil", &[("yellow lentil", 0.9), ("green lentil", 0.75)]);

    // Other
    table.insert("vegetable broth", &[("chicken broth", 0.8), ("beef broth", 0.7)]);
    table.insert("beef broth", &[("vegetable broth", 0.7), ("chicken broth", 0.75)]);
    table.insert("avocado", &[("hummus", 0.4)]);

    table
});

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The hand-curated table shipped with the crate
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN_TABLE
    }

    /// Declare the candidates for a missing ingredient, replacing any previous list
    ///
    /// Candidate order matters: it breaks similarity ties.
    pub fn insert(&mut self, missing: &str, candidates: &[(&str, f64)]) {
        let candidates = candidates
            .iter()
            .map(|(replacement, similarity)| SubstitutionCandidate {
                replacement: replacement.to_string(),
                similarity: *similarity,
            })
            .collect();
        self.entries.insert(missing.to_string(), candidates);
    }

    /// Declared candidates for a canonical ingredient name, in table order
    pub fn candidates(&self, missing: &str) -> Option<&[SubstitutionCandidate]> {
        self.entries.get(missing).map(Vec::as_slice)
    }

    /// Number of ingredients with declared substitutions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no substitutions are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(missing, candidates)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SubstitutionCandidate])> {
        self.entries
            .iter()
            .map(|(missing, candidates)| (missing.as_str(), candidates.as_slice()))
    }

    /// Find the best replacement for `missing` among the user's canonical ingredients
    ///
    /// Picks the available candidate with the highest similarity; on a tie the
    /// one declared first wins. Returns `None` when the ingredient has no entry,
    /// an empty candidate list, or no candidate the user has.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use pantry_recipes::substitutions::SubstitutionTable;
    ///
    /// let user: HashSet<String> = ["margarine".to_string()].into_iter().collect();
    /// let sub = SubstitutionTable::builtin().find("butter", &user).unwrap();
    /// assert_eq!(sub.replacement, "margarine");
    /// assert_eq!(sub.similarity, 0.9);
    /// ```
    pub fn find(&self, missing: &str, user_canonical: &HashSet<String>) -> Option<Substitution> {
        let candidates = self.candidates(missing)?;

        let mut best: Option<&SubstitutionCandidate> = None;
        for candidate in candidates {
            if !user_canonical.contains(&candidate.replacement) {
                continue;
            }
            // strict comparison keeps the first declared candidate on ties
            if best.map_or(true, |b| candidate.similarity > b.similarity) {
                best = Some(candidate);
            }
        }

        let best = best?;
        debug!(
            "Substituting '{}' with '{}' (similarity {})",
            missing, best.replacement, best.similarity
        );
        Some(Substitution {
            missing: missing.to_string(),
            replacement: best.replacement.clone(),
            similarity: best.similarity,
        })
    }
}

/// Find the best substitution using the built-in table
pub fn find_substitution(missing: &str, user_canonical: &HashSet<String>) -> Option<Substitution> {
    SubstitutionTable::builtin().find(missing, user_canonical)
}
