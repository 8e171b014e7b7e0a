use async_trait::async_trait;

use super::wire::{CategoryRecord, MealRecord};

/// Read access to TheMealDB. "No match" is an empty list or `None`, never an error.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn search_by_name(&self, query: &str) -> anyhow::Result<Vec<MealRecord>>;
    async fn lookup_by_id(&self, id: &str) -> anyhow::Result<Option<MealRecord>>;
    async fn random_meal(&self) -> anyhow::Result<Option<MealRecord>>;
    async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>>;
    async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<MealRecord>>;
    async fn filter_by_ingredient(&self, ingredient: &str) -> anyhow::Result<Vec<MealRecord>>;
}
