//! # Pantry Recipes
//!
//! Matches the ingredients a cook has on hand against a fixed recipe corpus,
//! ranks recipes by how completely they can be prepared, and suggests
//! substitutions for missing ingredients.

pub mod corpus;
pub mod ingredient_input;
pub mod localization;
pub mod matching;
pub mod matching_config;
pub mod normalize_patterns;
pub mod normalizer;
pub mod recipe_model;
pub mod report;
pub mod substitutions;
