mod mealdb;

pub use mealdb::MealDbProvider;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::{Area, Category, RecipeRecord};

/// Remote recipe catalog operations the search layer relies on
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "themealdb")
    fn provider_name(&self) -> &str;

    /// Server-side name search; empty when nothing matches
    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeRecord>, SearchError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<RecipeRecord>, SearchError>;

    async fn list_categories(&self) -> Result<Vec<Category>, SearchError>;

    async fn list_areas(&self) -> Result<Vec<Area>, SearchError>;

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeRecord>, SearchError>;

    /// Records returned here only carry id, name and thumbnail
    async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeRecord>, SearchError>;
}
