//! # Recipe Matching Engine
//!
//! Scores every recipe in a corpus against the user's available ingredients
//! and returns a ranked, filtered list of matches.
//!
//! ## Scoring
//!
//! Only required (non-optional) ingredients count:
//!
//! ```text
//! base_score         = matched / required * 100
//! substitution_bonus = sum(similarity * SUBSTITUTION_WEIGHT) / required * 100
//! score              = round(clamp(base_score + substitution_bonus, 0, 100))
//! ```
//!
//! A recipe with no required ingredients scores 100. Rounding is half-up.
//!
//! ## Ranking
//!
//! Matches below the minimum score are dropped, the rest are ordered by score
//! (descending), then by missing-ingredient count (ascending), then by corpus
//! order, and the list is capped at the maximum result count.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::corpus::RecipeCorpus;
//! use pantry_recipes::matching::RecipeMatcher;
//!
//! let matcher = RecipeMatcher::new(RecipeCorpus::builtin());
//! let matches = matcher.match_recipes(&["spaghetti", "garlic", "olive oil", "chili flakes"]);
//!
//! assert_eq!(matches[0].recipe.id, "spaghetti-aglio-olio");
//! assert_eq!(matches[0].score, 100);
//! ```

use log::{debug, trace};
use std::collections::HashSet;

use crate::corpus::RecipeCorpus;
use crate::matching_config::MatchingConfig;
use crate::normalizer::normalize;
use crate::recipe_model::{Recipe, RecipeMatch, Substitution};
use crate::substitutions::SubstitutionTable;

/// Scores and ranks recipes from a corpus
///
/// The matcher only borrows its corpus and substitution table; it holds no
/// mutable state, so one matcher can serve any number of queries, from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct RecipeMatcher<'a> {
    corpus: &'a RecipeCorpus,
    substitutions: &'a SubstitutionTable,
    config: MatchingConfig,
}

impl<'a> RecipeMatcher<'a> {
    /// Create a matcher with the built-in substitution table and default configuration
    pub fn new(corpus: &'a RecipeCorpus) -> Self {
        Self {
            corpus,
            substitutions: SubstitutionTable::builtin(),
            config: MatchingConfig::default(),
        }
    }

    /// Use a different substitution table
    pub fn with_substitutions(mut self, substitutions: &'a SubstitutionTable) -> Self {
        self.substitutions = substitutions;
        self
    }

    /// Use a different scoring configuration
    pub fn with_config(mut self, config: MatchingConfig) -> Self {
        self.config = config;
        self
    }

    /// The active scoring configuration
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score and rank all recipes against raw user ingredient strings
    ///
    /// Returns an empty list when the user supplied no ingredients at all.
    pub fn match_recipes<S: AsRef<str>>(&self, user_ingredients: &[S]) -> Vec<RecipeMatch<'a>> {
        if user_ingredients.is_empty() {
            debug!("No user ingredients supplied, skipping scoring");
            return Vec::new();
        }

        let user_set: HashSet<String> = user_ingredients
            .iter()
            .map(|raw| normalize(raw.as_ref()))
            .collect();
        debug!(
            "Matching {} user ingredients ({} canonical) against {} recipes",
            user_ingredients.len(),
            user_set.len(),
            self.corpus.len()
        );

        let mut matches: Vec<RecipeMatch<'a>> = self
            .corpus
            .iter()
            .map(|recipe| self.score_recipe(recipe, &user_set))
            .filter(|m| m.score >= self.config.min_score_threshold)
            .collect();
        let kept = matches.len();

        // sort_by is stable, so full ties keep corpus order
        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.missing_count().cmp(&b.missing_count()))
        });
        matches.truncate(self.config.max_results);

        debug!(
            "{} recipes at or above score {}, returning {}",
            kept,
            self.config.min_score_threshold,
            matches.len()
        );
        matches
    }

    /// Score one recipe against a set of canonical user ingredient names
    pub fn score_recipe(&self, recipe: &'a Recipe, user_set: &HashSet<String>) -> RecipeMatch<'a> {
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        let mut substitutions = Vec::new();
        let mut required_count = 0;

        for ingredient in recipe.required_ingredients() {
            required_count += 1;
            let canonical = normalize(&ingredient.name);

            if !canonical.is_empty() && user_set.contains(&canonical) {
                matched.push(ingredient.name.clone());
            } else if let Some(sub) = self.substitutions.find(&canonical, user_set) {
                substitutions.push(sub);
            } else {
                missing.push(ingredient.name.clone());
            }
        }

        let score = compute_score(
            matched.len(),
            &substitutions,
            required_count,
            self.config.substitution_weight,
        );
        trace!(
            "Recipe '{}': score={} matched={} substituted={} missing={}",
            recipe.id,
            score,
            matched.len(),
            substitutions.len(),
            missing.len()
        );

        RecipeMatch {
            recipe,
            score,
            matched_ingredients: matched,
            missing_ingredients: missing,
            substitutions,
        }
    }
}

/// Compute the 0-100 match score
///
/// # Examples
///
/// ```rust
/// use pantry_recipes::matching::compute_score;
/// use pantry_recipes::recipe_model::Substitution;
///
/// let margarine = Substitution {
///     missing: "butter".to_string(),
///     replacement: "margarine".to_string(),
///     similarity: 0.9,
/// };
/// assert_eq!(compute_score(0, &[margarine], 2, 0.6), 27);
/// assert_eq!(compute_score(0, &[], 0, 0.6), 100);
/// ```
pub fn compute_score(
    matched_count: usize,
    substitutions: &[Substitution],
    required_count: usize,
    substitution_weight: f64,
) -> u8 {
    if required_count == 0 {
        return 100;
    }

    let required = required_count as f64;
    let base_score = (matched_count as f64 / required) * 100.0;
    let substitution_bonus = substitutions
        .iter()
        .fold(0.0, |sum, sub| sum + sub.similarity * substitution_weight)
        / required
        * 100.0;

    // clamp before rounding; f64::round is half-up for non-negative values
    let clamped = (base_score + substitution_bonus).clamp(0.0, 100.0);
    if clamped.is_nan() {
        return 0;
    }
    clamped.round() as u8
}

/// Match raw user ingredients against a corpus with the built-in tables and defaults
pub fn match_recipes<'a, S: AsRef<str>>(
    corpus: &'a RecipeCorpus,
    user_ingredients: &[S],
) -> Vec<RecipeMatch<'a>> {
    RecipeMatcher::new(corpus).match_recipes(user_ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::RecipeIngredient;

    fn sub(similarity: f64) -> Substitution {
        Substitution {
            missing: "a".to_string(),
            replacement: "b".to_string(),
            similarity,
        }
    }

    #[test]
    fn test_compute_score_full_and_empty() {
        assert_eq!(compute_score(4, &[], 4, 0.6), 100);
        assert_eq!(compute_score(0, &[], 4, 0.6), 0);
        assert_eq!(compute_score(0, &[], 0, 0.6), 100);
    }

    #[test]
    fn test_compute_score_rounds_half_up() {
        // 0.5 * 1.0 / 4 * 100 = 12.5 exactly
        assert_eq!(compute_score(0, &[sub(1.0)], 4, 0.5), 13);
        // 1/3 * 100 = 33.33..
        assert_eq!(compute_score(1, &[], 3, 0.6), 33);
        // 2/3 * 100 = 66.66..
        assert_eq!(compute_score(2, &[], 3, 0.6), 67);
    }

    #[test]
    fn test_compute_score_clamps() {
        assert_eq!(compute_score(1, &[sub(5.0)], 1, 0.6), 100);
        assert_eq!(compute_score(0, &[sub(-2.0)], 1, 0.6), 0);
        assert_eq!(compute_score(1, &[sub(-1.0)], 2, 0.6), 20);
        assert_eq!(compute_score(0, &[sub(f64::NAN)], 1, 0.6), 0);
    }

    #[test]
    fn test_empty_required_name_never_matches() {
        let corpus = RecipeCorpus::new(vec![Recipe::new("odd", "Odd")
            .with_ingredient(RecipeIngredient::new("fresh", "1"))
            .with_ingredient(RecipeIngredient::new("salt", "1 pinch"))])
        .unwrap();
        let matcher = RecipeMatcher::new(&corpus);

        let matches = matcher.match_recipes(&["", "salt"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_ingredients, vec!["salt"]);
        assert_eq!(matches[0].missing_ingredients, vec!["fresh"]);
        assert_eq!(matches[0].score, 50);
    }
}
