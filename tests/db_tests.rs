use anyhow::{Context, Result};
use meal_planner::db::*;
use meal_planner::ingredient_model::Recipe;
use meal_planner::plan_store::PlanStore;
use meal_planner::shopping_list::{generate, ShoppingListService};
use sqlx::PgPool;
use std::env;

/// Helper macro to skip tests when database is not available
macro_rules! skip_if_no_db {
    ($test_fn:expr) => {
        match setup_test_db().await {
            Ok(pool) => $test_fn(&pool).await,
            Err(_) => {
                eprintln!("Skipping test: Database not available");
                Ok(())
            }
        }
    };
}

async fn setup_test_db() -> Result<PgPool> {
    // Skip tests if no DATABASE_URL is provided
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping database tests: DATABASE_URL not set");
            return Err(anyhow::anyhow!("Test database not configured"));
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to test database")?;

    init_database_schema(&pool).await?;

    Ok(pool)
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Bread", vec!["2 cups flour".to_string(), "1 tsp yeast".to_string()]),
        Recipe::new("Cake", vec!["1 cup flour".to_string(), "2 eggs".to_string()]),
    ]
}

#[tokio::test]
async fn test_shopping_list_operations() -> Result<()> {
    skip_if_no_db!(test_shopping_list_operations_impl)
}

async fn test_shopping_list_operations_impl(pool: &PgPool) -> Result<()> {
    let plan_id = "db-test-operations";
    let list = generate(&sample_recipes(), false);

    save_shopping_list(pool, plan_id, &list).await?;
    let loaded = load_shopping_list(pool, plan_id).await?;
    assert_eq!(loaded, Some(list.clone()));

    // Saving again replaces the stored list
    let smaller = generate(&sample_recipes()[..1], false);
    save_shopping_list(pool, plan_id, &smaller).await?;
    assert_eq!(load_shopping_list(pool, plan_id).await?, Some(smaller.clone()));

    let plans = list_saved_plans(pool).await?;
    let saved = plans.iter().find(|p| p.plan_id == plan_id).unwrap();
    assert_eq!(saved.item_count as usize, smaller.item_count());

    assert!(delete_shopping_list(pool, plan_id).await?);
    assert!(!delete_shopping_list(pool, plan_id).await?);
    assert!(load_shopping_list(pool, plan_id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_plan_store_through_service() -> Result<()> {
    skip_if_no_db!(test_plan_store_through_service_impl)
}

async fn test_plan_store_through_service_impl(pool: &PgPool) -> Result<()> {
    let plan_id = "db-test-service";
    let store = PgPlanStore::new(pool.clone());
    let service = ShoppingListService::default();

    let report = service
        .generate_for_plan(&store, plan_id, &sample_recipes())
        .await;
    assert!(report.saved());

    let stored = store.load_shopping_list(plan_id).await?;
    assert_eq!(stored, Some(report.list));

    store.delete_shopping_list(plan_id).await?;
    Ok(())
}
