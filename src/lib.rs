pub mod areas;
pub mod builder;
pub mod config;
pub mod error;
pub mod flags;
pub mod ingredients;
pub mod live;
pub mod model;
pub mod providers;
pub mod suggestions;
pub mod uniffi_bindings;

// Re-export commonly used types
pub use areas::{classify, match_area, QueryKind, AVAILABLE_AREAS};
pub use builder::{RecipeSearch, RecipeSearchBuilder, SearchResult, SearchSource};
pub use config::{LiveSearchConfig, SearchConfig};
pub use error::SearchError;
pub use flags::{area_flag_url, country_code, flag_url};
pub use ingredients::{extract_ingredients, IngredientLine};
pub use live::{LiveSearch, LiveState};
pub use model::{Area, Category, RecipeDetails, RecipeRecord};
pub use providers::{MealDbProvider, RecipeProvider};
pub use suggestions::{partition, partition_with_limit, SuggestionBucket};

/// Search free text against TheMealDB with default settings
///
/// An area name lists that area's recipes; anything else is a name search
/// split into suggestion buckets.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = mealdb_search::search("arrabiata").await?;
/// for recipe in result.recipes() {
///     println!("{}", recipe.name());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str) -> Result<SearchResult, SearchError> {
    RecipeSearch::builder().query(query).build().await
}

/// Name-search suggestions for `query` with default settings
pub async fn search_suggestions(query: &str) -> Result<SuggestionBucket, SearchError> {
    match RecipeSearch::builder().name(query).build().await? {
        SearchResult::Suggestions { suggestions, .. } => Ok(suggestions),
        _ => Err(SearchError::BuilderError(
            "Unexpected result for a name search".to_string(),
        )),
    }
}

/// Fetch one recipe and its ingredient table with default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let details = mealdb_search::recipe_details("52772").await?;
/// for line in &details.ingredients {
///     println!("{} {}", line.measure, line.ingredient);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn recipe_details(id: &str) -> Result<RecipeDetails, SearchError> {
    match RecipeSearch::builder().recipe(id).build().await? {
        SearchResult::Recipe(details) => Ok(details),
        _ => Err(SearchError::BuilderError(
            "Unexpected result for a recipe lookup".to_string(),
        )),
    }
}
