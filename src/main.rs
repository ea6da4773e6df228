use anyhow::{Context, Result};
use meal_planner::config::AppConfig;
use meal_planner::db::PgPlanStore;
use meal_planner::shopping_list::{load_recipes, ShoppingListService};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meal_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting meal planner shopping list generator");

    // Load configuration from the environment and .env file
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // The first CLI argument overrides RECIPES_PATH
    let recipes_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.recipes_path.clone())
        .context("Pass a recipes JSON file as the first argument or set RECIPES_PATH")?;

    let recipes = load_recipes(&recipes_path)
        .with_context(|| format!("Failed to load recipes from {}", recipes_path.display()))?;

    info!(recipes = recipes.len(), path = %recipes_path.display(), "Loaded recipes");

    let service = ShoppingListService::new(config.shopping.clone());

    let list = match (&config.database_url, &config.plan_id) {
        (Some(database_url), Some(plan_id)) => match PgPlanStore::connect(database_url).await {
            Ok(store) => {
                let report = service.generate_for_plan(&store, plan_id, &recipes).await;
                if let Some(e) = &report.save_error {
                    warn!(plan_id = %plan_id, error = %e, "Shopping list was not saved");
                }
                report.list
            }
            Err(e) => {
                warn!(error = %e, "Plan storage unavailable, generating without saving");
                service.generate(&recipes)
            }
        },
        _ => service.generate(&recipes),
    };

    println!("{}", service.copy_text(&list));

    Ok(())
}
