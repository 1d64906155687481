//! Plain-text rendering of match lists and recipe details for the CLI

use crate::localization::{t, t_args};
use crate::recipe_model::{Recipe, RecipeMatch, ScoreTier, Substitution};

/// Ingredients shown as examples in the initial empty state
pub const EXAMPLE_INGREDIENTS: [&str; 8] = [
    "chicken breast",
    "garlic",
    "onion",
    "olive oil",
    "tomato",
    "rice",
    "egg",
    "soy sauce",
];

/// Which empty state to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The user has not entered any ingredients yet
    Initial,
    /// Ingredients were entered but nothing scored high enough
    NoResults,
}

/// Render an empty state message
pub fn format_empty_state(state: EmptyState) -> String {
    match state {
        EmptyState::Initial => format!(
            "{}\n{}\n{}\n",
            t("empty-initial-title"),
            t("empty-initial-body"),
            t_args(
                "empty-initial-examples",
                &[("examples", EXAMPLE_INGREDIENTS.join(", ").as_str())]
            )
        ),
        EmptyState::NoResults => format!("{}\n{}\n", t("no-results-title"), t("no-results-body")),
    }
}

/// Render a substitution as a one-line hint
pub fn format_substitution(substitution: &Substitution) -> String {
    let percent = (substitution.similarity * 100.0).round().to_string();
    t_args(
        "substitution-hint",
        &[
            ("replacement", substitution.replacement.as_str()),
            ("missing", substitution.missing.as_str()),
            ("percent", percent.as_str()),
        ],
    )
}

fn tier_marker(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "●",
        ScoreTier::Medium => "◐",
        ScoreTier::Low => "○",
    }
}

/// Render one ranked match
pub fn format_match(rank: usize, recipe_match: &RecipeMatch<'_>) -> String {
    let recipe = recipe_match.recipe;
    let mut result = String::new();

    result.push_str(&format!(
        "{}. {} {} [{}]\n",
        rank,
        tier_marker(recipe_match.tier()),
        recipe.title,
        t_args("score-label", &[("score", recipe_match.score.to_string().as_str())])
    ));
    result.push_str(&format!(
        "   {} · {} · {}\n",
        recipe.cuisine,
        t_args("label-total-time", &[("minutes", recipe.total_time().to_string().as_str())]),
        recipe.difficulty
    ));

    if !recipe_match.matched_ingredients.is_empty() {
        result.push_str(&format!(
            "   {}: {}\n",
            t("label-have"),
            recipe_match.matched_ingredients.join(", ")
        ));
    }
    if !recipe_match.substitutions.is_empty() {
        result.push_str(&format!("   {}:\n", t("label-substitutes")));
        for substitution in &recipe_match.substitutions {
            result.push_str(&format!("     {}\n", format_substitution(substitution)));
        }
    }
    if !recipe_match.missing_ingredients.is_empty() {
        result.push_str(&format!(
            "   {}: {}\n",
            t("label-missing"),
            recipe_match.missing_ingredients.join(", ")
        ));
    }

    result
}

/// Render a ranked match list, or the no-results state when it is empty
pub fn format_matches(matches: &[RecipeMatch<'_>]) -> String {
    if matches.is_empty() {
        return format_empty_state(EmptyState::NoResults);
    }

    let mut result = format!(
        "{}\n\n",
        t_args("results-header", &[("count", matches.len().to_string().as_str())])
    );
    for (i, recipe_match) in matches.iter().enumerate() {
        result.push_str(&format_match(i + 1, recipe_match));
        result.push('\n');
    }
    result
}

/// Render the full details of a recipe
pub fn format_recipe_detail(recipe: &Recipe) -> String {
    let mut result = format!("{}\n{}\n\n", recipe.title, recipe.description);

    result.push_str(&format!(
        "{} ({})\n",
        t_args("label-total-time", &[("minutes", recipe.total_time().to_string().as_str())]),
        t_args(
            "label-prep-cook",
            &[
                ("prep", recipe.prep_time.to_string().as_str()),
                ("cook", recipe.cook_time.to_string().as_str()),
            ]
        )
    ));
    result.push_str(&format!(
        "{}\n",
        t_args("label-servings", &[("servings", recipe.servings.to_string().as_str())])
    ));
    result.push_str(&format!(
        "{}\n",
        t_args("label-difficulty", &[("difficulty", recipe.difficulty.as_str())])
    ));
    result.push_str(&format!(
        "{}\n",
        t_args("label-cuisine", &[("cuisine", recipe.cuisine.as_str())])
    ));
    if !recipe.tags.is_empty() {
        result.push_str(&format!("#{}\n", recipe.tags.join(" #")));
    }

    result.push_str(&format!("\n{}:\n", t("label-ingredients")));
    for ingredient in &recipe.ingredients {
        let optional = if ingredient.optional {
            format!(" ({})", t("label-optional"))
        } else {
            String::new()
        };
        result.push_str(&format!(
            "  - {} {}{}\n",
            ingredient.amount, ingredient.name, optional
        ));
    }

    result.push_str(&format!("\n{}:\n", t("label-instructions")));
    for (i, step) in recipe.steps.iter().enumerate() {
        result.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    result
}
