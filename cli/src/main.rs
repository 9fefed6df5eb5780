mod exercises;
mod meals;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mealboard_core::{ApiConfig, ReqwestClient, ReqwestClientBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mealboard")]
#[command(about = "Browse TheMealDB meals and wger exercises", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// TheMealDB base URL (overrides MEALBOARD_MEALDB_BASE_URL)
    #[arg(long, global = true)]
    mealdb_url: Option<String>,

    /// wger base URL (overrides MEALBOARD_WGER_BASE_URL)
    #[arg(long, global = true)]
    wger_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one meal by id
    Lookup {
        /// TheMealDB meal id
        id: String,
    },
    /// Search meals by name
    Search {
        /// Search term
        term: String,
    },
    /// Show a random meal
    Random,
    /// List the meals in a category
    Category {
        /// Category name, e.g. "Seafood"
        name: String,
    },
    /// Print the built-in category table
    Categories,
    /// Compare the built-in category table with the live API
    CheckCategories,
    /// List exercise categories
    ExerciseCategories,
    /// List exercises
    Exercises {
        /// Only show exercises in this category id
        #[arg(long)]
        category: Option<u32>,
    },
}

/// Output format selected on the command line.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn http_client(config: &ApiConfig) -> Result<ReqwestClient> {
    ReqwestClientBuilder::from_config(config)
        .build()
        .context("Failed to build HTTP client")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let format = if cli.json { Format::Json } else { Format::Text };

    let mut config = ApiConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.mealdb_url {
        config.mealdb_base_url = url;
    }
    if let Some(url) = cli.wger_url {
        config.wger_base_url = url;
    }
    tracing::debug!(
        mealdb = %config.mealdb_base_url,
        wger = %config.wger_base_url,
        "configuration loaded"
    );

    match cli.command {
        Commands::Lookup { id } => {
            meals::lookup(&meals::client(&config)?, &id, format).await?;
        }
        Commands::Search { term } => {
            meals::search(&meals::client(&config)?, &term, format).await?;
        }
        Commands::Random => {
            meals::random(&meals::client(&config)?, format).await?;
        }
        Commands::Category { name } => {
            meals::category(&meals::client(&config)?, &name, format).await?;
        }
        Commands::Categories => {
            meals::categories(format)?;
        }
        Commands::CheckCategories => {
            meals::check_categories(&meals::client(&config)?, format).await?;
        }
        Commands::ExerciseCategories => {
            exercises::categories(&exercises::client(&config)?, format).await?;
        }
        Commands::Exercises { category } => {
            exercises::list(&exercises::client(&config)?, category, format).await?;
        }
    }

    Ok(())
}
