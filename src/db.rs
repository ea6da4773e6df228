//! PostgreSQL plan storage.

use crate::errors::{Result, ShoppingListError};
use crate::ingredient_model::ShoppingList;
use crate::plan_store::PlanStore;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use tracing::{debug, info};

/// Summary row for a stored shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlan {
    pub plan_id: String,
    pub item_count: i32,
    pub updated_at: DateTime<Utc>,
}

/// Initialize the database schema
pub async fn init_database_schema(pool: &PgPool) -> Result<()> {
    info!("Initializing shopping list schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS shopping_lists (
            plan_id TEXT PRIMARY KEY,
            list_json TEXT NOT NULL,
            item_count INTEGER NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await?;

    info!("Shopping list schema initialized successfully");
    Ok(())
}

/// Insert or replace the list stored for a plan
pub async fn save_shopping_list(pool: &PgPool, plan_id: &str, list: &ShoppingList) -> Result<()> {
    let json = serde_json::to_string(list)?;
    let item_count = i32::try_from(list.item_count())
        .map_err(|_| ShoppingListError::Storage("shopping list too large".to_string()))?;

    sqlx::query(
        "INSERT INTO shopping_lists (plan_id, list_json, item_count, updated_at)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (plan_id) DO UPDATE
         SET list_json = EXCLUDED.list_json,
             item_count = EXCLUDED.item_count,
             updated_at = EXCLUDED.updated_at",
    )
    .bind(plan_id)
    .bind(json)
    .bind(item_count)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    debug!(plan_id = %plan_id, item_count, "Saved shopping list");
    Ok(())
}

/// Read the list stored for a plan
pub async fn load_shopping_list(pool: &PgPool, plan_id: &str) -> Result<Option<ShoppingList>> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT list_json FROM shopping_lists WHERE plan_id = $1")
            .bind(plan_id)
            .fetch_optional(pool)
            .await?;

    match row {
        Some((json,)) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Delete the list stored for a plan
pub async fn delete_shopping_list(pool: &PgPool, plan_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM shopping_lists WHERE plan_id = $1")
        .bind(plan_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// All stored plans, most recently updated first
pub async fn list_saved_plans(pool: &PgPool) -> Result<Vec<SavedPlan>> {
    let rows: Vec<(String, i32, DateTime<Utc>)> = sqlx::query_as(
        "SELECT plan_id, item_count, updated_at FROM shopping_lists ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(plan_id, item_count, updated_at)| SavedPlan {
            plan_id,
            item_count,
            updated_at,
        })
        .collect())
}

/// [`PlanStore`] backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgPlanStore {
    pool: PgPool,
}

impl PgPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        init_database_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl PlanStore for PgPlanStore {
    async fn save_shopping_list(&self, plan_id: &str, list: &ShoppingList) -> Result<()> {
        save_shopping_list(&self.pool, plan_id, list).await
    }

    async fn load_shopping_list(&self, plan_id: &str) -> Result<Option<ShoppingList>> {
        load_shopping_list(&self.pool, plan_id).await
    }

    async fn delete_shopping_list(&self, plan_id: &str) -> Result<bool> {
        delete_shopping_list(&self.pool, plan_id).await
    }
}
