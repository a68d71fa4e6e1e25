use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use crate::areas::{classify, QueryKind};
use crate::config::SearchConfig;
use crate::model::{RecipeDetails, RecipeRecord, FIELD_AREA, FIELD_CATEGORY};
use crate::providers::{MealDbProvider, RecipeProvider};
use crate::suggestions::{partition_with_limit, SuggestionBucket, SUGGESTION_LIMIT};
use crate::SearchError;

/// What the search should look for
#[derive(Debug, Clone)]
pub enum SearchSource {
    /// Free text; an area name switches to an area listing, anything else is a name search
    Query(String),
    /// Recipe-name search, never treated as an area
    Name(String),
    /// Recipes from one cuisine area
    Area(String),
    /// Recipes from one category
    Category(String),
    /// A single recipe by identifier
    Recipe(String),
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub enum SearchResult {
    /// Name search split into prefix and substring matches
    Suggestions {
        query: String,
        suggestions: SuggestionBucket,
    },
    /// Every recipe of an area, with `strArea` filled in
    Area {
        area: String,
        recipes: Vec<RecipeRecord>,
    },
    /// Every recipe of a category, with `strCategory` filled in
    Category {
        category: String,
        recipes: Vec<RecipeRecord>,
    },
    /// A single recipe with its ingredient table
    Recipe(RecipeDetails),
}

impl SearchResult {
    /// Recipes in display order
    pub fn recipes(&self) -> Vec<&RecipeRecord> {
        match self {
            SearchResult::Suggestions { suggestions, .. } => suggestions.all().collect(),
            SearchResult::Area { recipes, .. } | SearchResult::Category { recipes, .. } => {
                recipes.iter().collect()
            }
            SearchResult::Recipe(details) => vec![&details.record],
        }
    }
}

/// Builder for configuring and executing recipe searches
#[derive(Default)]
pub struct RecipeSearchBuilder {
    source: Option<SearchSource>,
    provider: Option<Arc<dyn RecipeProvider>>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    limit: Option<usize>,
}

impl RecipeSearchBuilder {
    /// Search free text typed by the user
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().query("italian");
    /// ```
    pub fn query(mut self, text: impl Into<String>) -> Self {
        self.source = Some(SearchSource::Query(text.into()));
        self
    }

    /// Search recipe names only
    pub fn name(mut self, text: impl Into<String>) -> Self {
        self.source = Some(SearchSource::Name(text.into()));
        self
    }

    /// List the recipes of an area
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().area("Japanese");
    /// ```
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.source = Some(SearchSource::Area(area.into()));
        self
    }

    /// List the recipes of a category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.source = Some(SearchSource::Category(category.into()));
        self
    }

    /// Fetch one recipe by id
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().recipe("52772");
    /// ```
    pub fn recipe(mut self, id: impl Into<String>) -> Self {
        self.source = Some(SearchSource::Recipe(id.into()));
        self
    }

    /// Use a custom provider instead of the TheMealDB client
    pub fn provider(mut self, provider: Arc<dyn RecipeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Point the default client at another API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Take base URL, timeout and suggestion limit from a loaded configuration
    pub fn config(mut self, config: &SearchConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = Some(config.request_timeout());
        self.limit = Some(config.suggestion_limit);
        self
    }

    /// Maximum entries per suggestion bucket
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build and execute the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No source was specified
    /// - A text source is blank
    /// - The provider call fails
    /// - A recipe id does not exist
    ///
    /// # Example
    /// ```no_run
    /// # use mealdb_search::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeSearch::builder().query("chicken").build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<SearchResult, SearchError> {
        let source = self.source.ok_or_else(|| {
            SearchError::BuilderError(
                "No search source specified. Use .query(), .area(), .category() or .recipe()"
                    .to_string(),
            )
        })?;

        let limit = self.limit.unwrap_or(SUGGESTION_LIMIT);

        let provider: Arc<dyn RecipeProvider> = match self.provider {
            Some(provider) => provider,
            None => {
                let config = SearchConfig::default();
                let timeout = self.timeout.unwrap_or_else(|| config.request_timeout());
                let base_url = self.base_url.unwrap_or(config.base_url);
                Arc::new(MealDbProvider::with_options(base_url, Some(timeout))?)
            }
        };

        match source {
            SearchSource::Query(text) => match classify(&text) {
                QueryKind::Area(area) => {
                    info!("Query '{}' matches area {}", text.trim(), area);
                    search_area(provider.as_ref(), area.to_string()).await
                }
                QueryKind::Name(name) => search_name(provider.as_ref(), name, limit).await,
            },
            SearchSource::Name(name) => search_name(provider.as_ref(), name, limit).await,
            SearchSource::Area(area) => search_area(provider.as_ref(), area).await,
            SearchSource::Category(category) => {
                search_category(provider.as_ref(), category).await
            }
            SearchSource::Recipe(id) => {
                let id = non_blank(id, "recipe id")?;
                let record = provider
                    .get_by_id(&id)
                    .await?
                    .ok_or_else(|| SearchError::NotFound(id.clone()))?;
                Ok(SearchResult::Recipe(record.into()))
            }
        }
    }
}

async fn search_name(
    provider: &dyn RecipeProvider,
    name: String,
    limit: usize,
) -> Result<SearchResult, SearchError> {
    let name = non_blank(name, "search text")?;
    let records = provider.search_by_name(&name).await?;
    let suggestions = partition_with_limit(&records, &name, limit);
    debug!(
        "'{}': {} results, {} suggested",
        name,
        records.len(),
        suggestions.len()
    );
    Ok(SearchResult::Suggestions {
        query: name,
        suggestions,
    })
}

// Area listings come back without strArea, so it is filled in from the request
async fn search_area(
    provider: &dyn RecipeProvider,
    area: String,
) -> Result<SearchResult, SearchError> {
    let area = non_blank(area, "area")?;
    let mut recipes = provider.filter_by_area(&area).await?;
    for recipe in &mut recipes {
        recipe.fill_field(FIELD_AREA, &area);
    }
    Ok(SearchResult::Area { area, recipes })
}

async fn search_category(
    provider: &dyn RecipeProvider,
    category: String,
) -> Result<SearchResult, SearchError> {
    let category = non_blank(category, "category")?;
    let mut recipes = provider.filter_by_category(&category).await?;
    for recipe in &mut recipes {
        recipe.fill_field(FIELD_CATEGORY, &category);
    }
    Ok(SearchResult::Category { category, recipes })
}

fn non_blank(value: String, what: &str) -> Result<String, SearchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use mealdb_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
