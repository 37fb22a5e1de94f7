use thiserror::Error;

/// Errors that can occur while fetching or decoding meals
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including non-success HTTP statuses
    #[error("Failed to fetch from TheMealDB: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed or type-mismatched JSON in a response body
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Lookup returned no meal for the requested id
    #[error("No meal found for id {id}")]
    NotFound { id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FetchError {
    /// True for the detail-lookup "no such meal" case, as opposed to a
    /// transport or decode failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}
