use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{Area, Category, RecipeRecord};
use crate::providers::RecipeProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("mealdb-search/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct MealsResponse<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

/// TheMealDB JSON API client
pub struct MealDbProvider {
    client: Client,
    base_url: String,
}

impl MealDbProvider {
    /// Create a new provider from configuration
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::with_options(config.base_url.clone(), Some(config.request_timeout()))
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbProvider {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(MealDbProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn meals(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<RecipeRecord>, SearchError> {
        let response: MealsResponse<RecipeRecord> = self.get_json(endpoint, query).await?;
        let meals = response.meals.unwrap_or_default();
        debug!("{} returned {} meals", endpoint, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl RecipeProvider for MealDbProvider {
    fn provider_name(&self) -> &str {
        "themealdb"
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.meals("search.php", &[("s", name)]).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<RecipeRecord>, SearchError> {
        let meals = self.meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, SearchError> {
        let response: CategoriesResponse = self.get_json("categories.php", &[]).await?;
        Ok(response.categories.unwrap_or_default())
    }

    async fn list_areas(&self) -> Result<Vec<Area>, SearchError> {
        let response: MealsResponse<Area> = self.get_json("list.php", &[("a", "list")]).await?;
        Ok(response.meals.unwrap_or_default())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.meals("filter.php", &[("c", category)]).await
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.meals("filter.php", &[("a", area)]).await
    }
}
