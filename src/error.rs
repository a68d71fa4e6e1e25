use thiserror::Error;

/// Errors that can occur while talking to the recipe catalog
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure or non-success HTTP status from the provider
    #[error("Failed to fetch from recipe provider: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Provider answered with a body we could not decode
    #[error("Failed to parse provider response: {0}")]
    ParseError(String),

    /// A lookup by identifier returned nothing
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Empty or otherwise unusable search input
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::ParseError(err.to_string())
    }
}
