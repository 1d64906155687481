//! # Matching Configuration Module
//!
//! This module defines the scoring constants used by the matching engine
//! and the configuration structure that carries them.

// Constants for recipe scoring
pub const SUBSTITUTION_WEIGHT: f64 = 0.6; // a substitution is worth 60% of the real ingredient
pub const MIN_SCORE_THRESHOLD: u8 = 10;
pub const MAX_RESULTS: usize = 20;
pub const MAX_AUTOCOMPLETE_SUGGESTIONS: usize = 8;

// Score badge tiers
pub const HIGH_SCORE_TIER: u8 = 80;
pub const MEDIUM_SCORE_TIER: u8 = 50;

/// Configuration structure for recipe matching
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Fraction of a full match credited for a substitution (0-1)
    pub substitution_weight: f64,
    /// Matches scoring below this are discarded (0-100)
    pub min_score_threshold: u8,
    /// Maximum number of matches returned per query
    pub max_results: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            substitution_weight: SUBSTITUTION_WEIGHT,
            min_score_threshold: MIN_SCORE_THRESHOLD,
            max_results: MAX_RESULTS,
        }
    }
}
