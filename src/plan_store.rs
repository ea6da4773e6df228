//! Plan persistence seam.
//!
//! A generated shopping list can be stored under a meal-plan identifier and
//! read back later. Stores keep the list as opaque JSON.

use crate::errors::Result;
use crate::ingredient_model::ShoppingList;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::Mutex;

/// Key-value storage for shopping lists, keyed by plan id
pub trait PlanStore {
    fn save_shopping_list(
        &self,
        plan_id: &str,
        list: &ShoppingList,
    ) -> impl Future<Output = Result<()>> + Send;

    fn load_shopping_list(
        &self,
        plan_id: &str,
    ) -> impl Future<Output = Result<Option<ShoppingList>>> + Send;

    /// Returns `true` when a list was removed
    fn delete_shopping_list(&self, plan_id: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Process-local store, used by tests and single-run tools
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    lists: Mutex<HashMap<String, String>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.lists.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lists.lock().await.is_empty()
    }
}

impl PlanStore for InMemoryPlanStore {
    async fn save_shopping_list(&self, plan_id: &str, list: &ShoppingList) -> Result<()> {
        let json = serde_json::to_string(list)?;
        self.lists.lock().await.insert(plan_id.to_string(), json);
        Ok(())
    }

    async fn load_shopping_list(&self, plan_id: &str) -> Result<Option<ShoppingList>> {
        let lists = self.lists.lock().await;
        match lists.get(plan_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn delete_shopping_list(&self, plan_id: &str) -> Result<bool> {
        Ok(self.lists.lock().await.remove(plan_id).is_some())
    }
}
