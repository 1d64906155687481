use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use pantry_recipes::corpus::RecipeCorpus;
use pantry_recipes::ingredient_input::{suggest, PantryList};
use pantry_recipes::localization::{init_localization, t_args};
use pantry_recipes::matching::RecipeMatcher;
use pantry_recipes::matching_config::MAX_AUTOCOMPLETE_SUGGESTIONS;
use pantry_recipes::report::{format_empty_state, format_matches, format_recipe_detail, EmptyState};

/// Find recipes you can make with the ingredients you have
#[derive(Debug, Parser)]
#[command(name = "pantry-recipes")]
#[command(version)]
struct Cli {
    /// Recipe corpus JSON file (defaults to the bundled corpus)
    #[arg(long, global = true, env = "PANTRY_RECIPES_CORPUS")]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank recipes against the ingredients you have
    Match {
        /// Ingredients you have; each argument may hold a comma-separated list
        ingredients: Vec<String>,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full details of a recipe
    Show {
        /// Recipe identifier
        id: String,
    },

    /// Suggest ingredient names for a partial query
    Suggest {
        /// Partial ingredient name
        query: String,

        /// Ingredients already entered, excluded from the suggestions
        #[arg(long = "have")]
        have: Vec<String>,
    },

    /// List every ingredient name in the corpus
    Ingredients,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    init_localization().context("Failed to initialize localization")?;

    let cli = Cli::parse();

    let loaded;
    let corpus = match &cli.corpus {
        Some(path) => {
            loaded = RecipeCorpus::from_path(path)
                .with_context(|| format!("Failed to load corpus from {}", path.display()))?;
            &loaded
        }
        None => RecipeCorpus::builtin(),
    };
    info!("Using recipe corpus with {} recipes", corpus.len());

    match cli.command {
        Commands::Match { ingredients, json } => {
            let mut pantry = PantryList::new();
            for argument in &ingredients {
                pantry.add_delimited(argument);
            }

            if pantry.is_empty() && !json {
                print!("{}", format_empty_state(EmptyState::Initial));
                return Ok(());
            }

            let matcher = RecipeMatcher::new(corpus);
            let matches = matcher.match_recipes(pantry.as_slice());

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?
                );
            } else {
                print!("{}", format_matches(&matches));
            }
        }
        Commands::Show { id } => match corpus.get_by_id(&id) {
            Some(recipe) => print!("{}", format_recipe_detail(recipe)),
            None => bail!(t_args("recipe-not-found", &[("id", id.as_str())])),
        },
        Commands::Suggest { query, have } => {
            let names = corpus.all_ingredient_names();
            let suggestions = suggest(&query, &names, &have, MAX_AUTOCOMPLETE_SUGGESTIONS);
            if suggestions.is_empty() {
                println!("{}", t_args("suggestions-none", &[("query", query.as_str())]));
            }
            for suggestion in suggestions {
                println!("{}", suggestion);
            }
        }
        Commands::Ingredients => {
            for name in corpus.all_ingredient_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
