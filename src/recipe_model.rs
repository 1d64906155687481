//! # Recipe and Match Data Model
//!
//! This module defines the data structures for recipes as they are loaded from
//! the corpus, and for the match results produced by the matching engine.
//!
//! ## Core Concepts
//!
//! - **Recipe**: an immutable corpus entry with its ingredients and steps
//! - **RecipeIngredient**: a display name, an opaque amount and an `optional` flag
//! - **Substitution**: a similarity-scored stand-in for a missing ingredient
//! - **RecipeMatch**: the score and ingredient breakdown of one recipe for one query
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::recipe_model::{Difficulty, Recipe, RecipeIngredient};
//!
//! let recipe = Recipe::new("toast", "Toast")
//!     .with_ingredient(RecipeIngredient::new("bread", "2 slices"))
//!     .with_ingredient(RecipeIngredient::new("butter", "1 tbsp").optional())
//!     .with_difficulty(Difficulty::Easy);
//!
//! assert_eq!(recipe.required_ingredients().count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::matching_config::{HIGH_SCORE_TIER, MEDIUM_SCORE_TIER};

/// A recipe from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier (e.g., "pasta-aglio-olio")
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown in result cards
    #[serde(default)]
    pub description: String,

    /// Ingredients in recipe order
    pub ingredients: Vec<RecipeIngredient>,

    /// Instruction steps in order
    #[serde(default)]
    pub steps: Vec<String>,

    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: i64,

    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: i64,

    /// Number of servings
    #[serde(default)]
    pub servings: i64,

    /// Difficulty tier
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Cuisine label (e.g., "Italian")
    #[serde(default)]
    pub cuisine: String,

    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Human-readable ingredient name (e.g., "cherry tomatoes")
    pub name: String,

    /// Human-readable amount, never parsed (e.g., "2 cups")
    #[serde(default)]
    pub amount: String,

    /// Optional ingredients never count toward the score
    #[serde(default)]
    pub optional: bool,
}

/// Recipe difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A substitution resolved for a missing required ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Canonical name of the missing ingredient
    pub missing: String,
    /// Canonical name of the replacement the user has
    pub replacement: String,
    /// Declared similarity (0.0 to 1.0)
    pub similarity: f64,
}

/// The result of scoring one recipe against the user's ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch<'a> {
    /// The scored recipe
    pub recipe: &'a Recipe,
    /// Match score (0 to 100)
    pub score: u8,
    /// Display names of required ingredients the user has
    pub matched_ingredients: Vec<String>,
    /// Display names of required ingredients with no substitute available
    pub missing_ingredients: Vec<String>,
    /// Substitutions found for missing required ingredients
    pub substitutions: Vec<Substitution>,
}

/// Coarse score bands used when presenting a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl Recipe {
    /// Create a recipe with just an id and a title
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 0,
            difficulty: Difficulty::default(),
            cuisine: String::new(),
            tags: Vec::new(),
            image: None,
        }
    }

    /// Append an ingredient
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Append an instruction step
    pub fn with_step(mut self, step: &str) -> Self {
        self.steps.push(step.to_string());
        self
    }

    /// Set preparation and cooking time in minutes
    pub fn with_times(mut self, prep_time: i64, cook_time: i64) -> Self {
        self.prep_time = prep_time;
        self.cook_time = cook_time;
        self
    }

    /// Set the difficulty tier
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Ingredients that count toward the score
    pub fn required_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|ing| !ing.optional)
    }

    /// Preparation plus cooking time in minutes
    pub fn total_time(&self) -> i64 {
        self.prep_time + self.cook_time
    }
}

impl RecipeIngredient {
    /// Create a required ingredient
    pub fn new(name: &str, amount: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            optional: false,
        }
    }

    /// Mark this ingredient as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Difficulty {
    /// Lowercase label as used in the corpus
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RecipeMatch<'_> {
    /// Number of required ingredients matched directly
    pub fn matched_count(&self) -> usize {
        self.matched_ingredients.len()
    }

    /// Number of required ingredients with neither a match nor a substitute
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    /// Score band for presentation
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

impl ScoreTier {
    /// Band a 0-100 score
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_SCORE_TIER {
            ScoreTier::High
        } else if score >= MEDIUM_SCORE_TIER {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}
