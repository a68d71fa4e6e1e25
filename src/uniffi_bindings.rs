//! UniFFI bindings for mealdb-search
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{
    Area, Category, IngredientLine, MealDbProvider, RecipeDetails, RecipeProvider, RecipeRecord,
    SearchConfig, SearchError, SearchResult, SuggestionBucket,
};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe summary, as shown on a result card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: String,
    pub name: String,
    /// Thumbnail URL (empty string if none)
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
}

impl From<&RecipeRecord> for FfiRecipeSummary {
    fn from(record: &RecipeRecord) -> Self {
        FfiRecipeSummary {
            id: record.id().unwrap_or_default().to_string(),
            name: record.name().to_string(),
            thumbnail: record.thumbnail().unwrap_or_default().to_string(),
            category: record.category().map(str::to_string),
            area: record.area().map(str::to_string),
        }
    }
}

/// FFI-compatible ingredient row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredientLine {
    pub ingredient: String,
    pub measure: String,
}

impl From<IngredientLine> for FfiIngredientLine {
    fn from(line: IngredientLine) -> Self {
        FfiIngredientLine {
            ingredient: line.ingredient,
            measure: line.measure,
        }
    }
}

/// FFI-compatible suggestion buckets
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSuggestions {
    pub starts_with: Vec<FfiRecipeSummary>,
    pub contains: Vec<FfiRecipeSummary>,
}

impl From<SuggestionBucket> for FfiSuggestions {
    fn from(bucket: SuggestionBucket) -> Self {
        FfiSuggestions {
            starts_with: bucket.starts_with.iter().map(Into::into).collect(),
            contains: bucket.contains.iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible recipe detail view
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetails {
    pub summary: FfiRecipeSummary,
    /// Recipe instructions (empty string if none)
    pub instructions: String,
    pub youtube_embed_url: Option<String>,
    pub ingredients: Vec<FfiIngredientLine>,
}

impl From<RecipeDetails> for FfiRecipeDetails {
    fn from(details: RecipeDetails) -> Self {
        FfiRecipeDetails {
            summary: (&details.record).into(),
            instructions: details
                .record
                .instructions()
                .unwrap_or_default()
                .to_string(),
            youtube_embed_url: details.youtube_embed_url(),
            ingredients: details.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible category from the category grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCategory {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
    /// Description cut to 100 chars, as shown on a category card
    pub short_description: String,
}

impl From<Category> for FfiCategory {
    fn from(category: Category) -> Self {
        FfiCategory {
            short_description: category.short_description(100),
            id: category.id,
            name: category.name,
            thumbnail: category.thumbnail_url,
            description: category.description,
        }
    }
}

/// FFI-compatible cuisine area
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiArea {
    pub name: String,
    /// Flag image URL, None when the area has no known country
    pub flag_url: Option<String>,
}

impl From<Area> for FfiArea {
    fn from(area: Area) -> Self {
        FfiArea {
            flag_url: area.flag_url(crate::flags::DEFAULT_FLAG_WIDTH),
            name: area.name,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSearchError {
    /// Network or HTTP failure talking to the catalog
    FetchError { message: String },
    /// Catalog answered with something we could not read
    ParseError { message: String },
    /// Unknown recipe id
    NotFound { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSearchError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiSearchError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiSearchError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiSearchError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiSearchError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiSearchError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiSearchError {}

impl From<SearchError> for FfiSearchError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::FetchError(e) => FfiSearchError::FetchError {
                message: e.to_string(),
            },
            SearchError::ParseError(message) => FfiSearchError::ParseError { message },
            SearchError::NotFound(message) => FfiSearchError::NotFound { message },
            SearchError::InvalidQuery(message) | SearchError::BuilderError(message) => {
                FfiSearchError::InvalidInput { message }
            }
            SearchError::ConfigError(e) => FfiSearchError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiSearchError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiSearchError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Canonical area name if `term` names a recognized area
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn match_area(term: String) -> Option<String> {
    crate::match_area(&term).map(str::to_string)
}

/// Flag image URL for an area, or None when the area has no known country
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn area_flag_url(area: String, width: u32) -> Option<String> {
    crate::area_flag_url(&area, width)
}

/// Fetch name-search suggestions
///
/// # Arguments
/// * `query` - Text typed by the user
/// * `timeout_seconds` - Optional timeout in seconds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_suggestions(
    query: String,
    timeout_seconds: Option<u64>,
) -> Result<FfiSuggestions, FfiSearchError> {
    let rt = create_runtime()?;
    rt.block_on(async { search_suggestions_async(query, timeout_seconds).await })
}

async fn search_suggestions_async(
    query: String,
    timeout_seconds: Option<u64>,
) -> Result<FfiSuggestions, FfiSearchError> {
    let mut builder = crate::RecipeSearch::builder().name(query);
    if let Some(timeout_secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    match builder.build().await? {
        SearchResult::Suggestions { suggestions, .. } => Ok(suggestions.into()),
        _ => Err(FfiSearchError::InvalidInput {
            message: "Unexpected result for a name search".to_string(),
        }),
    }
}

/// Fetch one recipe with its ingredient table
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recipe_details(
    id: String,
    timeout_seconds: Option<u64>,
) -> Result<FfiRecipeDetails, FfiSearchError> {
    let rt = create_runtime()?;
    rt.block_on(async { recipe_details_async(id, timeout_seconds).await })
}

async fn recipe_details_async(
    id: String,
    timeout_seconds: Option<u64>,
) -> Result<FfiRecipeDetails, FfiSearchError> {
    let mut builder = crate::RecipeSearch::builder().recipe(id);
    if let Some(timeout_secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    match builder.build().await? {
        SearchResult::Recipe(details) => Ok(details.into()),
        _ => Err(FfiSearchError::InvalidInput {
            message: "Unexpected result for a recipe lookup".to_string(),
        }),
    }
}

/// List every recipe category
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_categories(
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiCategory>, FfiSearchError> {
    let rt = create_runtime()?;
    let base_url = SearchConfig::default().base_url;
    rt.block_on(async { list_categories_async(&base_url, timeout_seconds).await })
}

async fn list_categories_async(
    base_url: &str,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiCategory>, FfiSearchError> {
    let provider =
        MealDbProvider::with_options(base_url, timeout_seconds.map(Duration::from_secs))?;
    let categories = provider.list_categories().await?;
    Ok(categories.into_iter().map(Into::into).collect())
}

/// List every cuisine area with its flag
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_areas(timeout_seconds: Option<u64>) -> Result<Vec<FfiArea>, FfiSearchError> {
    let rt = create_runtime()?;
    let base_url = SearchConfig::default().base_url;
    rt.block_on(async { list_areas_async(&base_url, timeout_seconds).await })
}

async fn list_areas_async(
    base_url: &str,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiArea>, FfiSearchError> {
    let provider =
        MealDbProvider::with_options(base_url, timeout_seconds.map(Duration::from_secs))?;
    let areas = provider.list_areas().await?;
    Ok(areas.into_iter().map(Into::into).collect())
}

/// Recipes of one area, each with `area` filled in
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn area_recipes(
    area: String,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiRecipeSummary>, FfiSearchError> {
    let rt = create_runtime()?;
    let base_url = SearchConfig::default().base_url;
    rt.block_on(async { listing_async(&base_url, Listing::Area(area), timeout_seconds).await })
}

/// Recipes of one category, each with `category` filled in
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn category_recipes(
    category: String,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiRecipeSummary>, FfiSearchError> {
    let rt = create_runtime()?;
    let base_url = SearchConfig::default().base_url;
    rt.block_on(async {
        listing_async(&base_url, Listing::Category(category), timeout_seconds).await
    })
}

enum Listing {
    Area(String),
    Category(String),
}

async fn listing_async(
    base_url: &str,
    listing: Listing,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiRecipeSummary>, FfiSearchError> {
    let mut builder = crate::RecipeSearch::builder().base_url(base_url);
    builder = match listing {
        Listing::Area(area) => builder.area(area),
        Listing::Category(category) => builder.category(category),
    };
    if let Some(timeout_secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    match builder.build().await? {
        SearchResult::Area { recipes, .. } | SearchResult::Category { recipes, .. } => {
            Ok(recipes.iter().map(Into::into).collect())
        }
        _ => Err(FfiSearchError::InvalidInput {
            message: "Unexpected result for a listing".to_string(),
        }),
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
