//! # Recipe Corpus Module
//!
//! This module provides the read-only recipe corpus the matching engine scores
//! against: loading from JSON, lookup by identifier, and the flattened list of
//! ingredient names used for typeahead.
//!
//! The corpus keeps recipes in insertion order; that order is the final
//! tie-breaker when ranking matches.

use log::{debug, info};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::recipe_model::Recipe;

// Bundled corpus, embedded at compile time
const BUILTIN_CORPUS_JSON: &str = include_str!("../data/recipes.json");

static BUILTIN_CORPUS: LazyLock<RecipeCorpus> = LazyLock::new(|| {
    RecipeCorpus::from_json_str(BUILTIN_CORPUS_JSON)
        .expect("Bundled recipe corpus should be valid")
});

/// Errors that can occur while loading a corpus
#[derive(Debug)]
pub enum CorpusError {
    /// The corpus file could not be read
    Io(std::io::Error),
    /// The corpus is not a valid JSON array of recipes
    Parse(serde_json::Error),
    /// Two recipes share an identifier
    DuplicateId(String),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io(err) => write!(f, "Failed to read recipe corpus: {err}"),
            CorpusError::Parse(err) => write!(f, "Invalid recipe corpus: {err}"),
            CorpusError::DuplicateId(id) => write!(f, "Duplicate recipe id: {id}"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(err) => Some(err),
            CorpusError::Parse(err) => Some(err),
            CorpusError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err)
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(err: serde_json::Error) -> Self {
        CorpusError::Parse(err)
    }
}

/// An immutable, ordered collection of recipes with unique identifiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCorpus {
    recipes: Vec<Recipe>,
}

impl RecipeCorpus {
    /// Build a corpus from recipes, rejecting duplicate identifiers
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_recipes::corpus::RecipeCorpus;
    /// use pantry_recipes::recipe_model::Recipe;
    ///
    /// let corpus = RecipeCorpus::new(vec![Recipe::new("toast", "Toast")])?;
    /// assert!(corpus.get_by_id("toast").is_some());
    /// # Ok::<(), pantry_recipes::corpus::CorpusError>(())
    /// ```
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CorpusError> {
        {
            let mut seen = HashSet::new();
            for recipe in &recipes {
                if !seen.insert(recipe.id.as_str()) {
                    return Err(CorpusError::DuplicateId(recipe.id.clone()));
                }
            }
        }
        debug!("Built recipe corpus with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// The corpus bundled with the crate
    pub fn builtin() -> &'static RecipeCorpus {
        &BUILTIN_CORPUS
    }

    /// Parse a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a JSON array of recipes from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        info!("Loading recipe corpus from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a recipe by identifier
    pub fn get_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// All recipes in insertion order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate over recipes in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the corpus has no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every ingredient display name in the corpus, lowercased, de-duplicated and sorted
    pub fn all_ingredient_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|ingredient| ingredient.name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        names.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a RecipeCorpus {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
