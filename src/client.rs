use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{MealDetail, MealSummary};

/// API root for the free public v1 key.
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MealdbBrowser/0.2)";

/// The two lookup operations the browser is built on.
///
/// Implemented by [`MealDbClient`]; the trait exists so the state container
/// (and its tests) can swap in a different source.
#[async_trait]
pub trait MealApi: Send + Sync {
    /// List the meals in a category, sorted by display name.
    async fn meals_by_category(&self, category: &str) -> Result<Vec<MealSummary>, FetchError>;

    /// Fetch the full record for a single meal id.
    async fn meal_detail(&self, id: &str) -> Result<MealDetail, FetchError>;
}

/// Both endpoints wrap their payload in `{"meals": [...]}`, where the array
/// may be null for an unknown category or id.
#[derive(Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

/// HTTP client for TheMealDB.
///
/// Every call performs exactly one outbound request; there is no retry and
/// no caching, so a repeated call re-fetches.
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

/// Builder for configuring a [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Override the API root, e.g. to point at a mock server
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::MealDbClient;
    ///
    /// let client = MealDbClient::builder()
    ///     .base_url("https://themealdb.com/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request timeout (default 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MealDbClient, FetchError> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        while base_url.ends_with('/') {
            base_url.pop();
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()?;

        Ok(MealDbClient { client, base_url })
    }
}

impl MealDbClient {
    /// Create a client with the default base URL and timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Start configuring a client
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    /// List the meals in a category.
    ///
    /// A `{"meals": null}` response (unknown category) is an empty list, not
    /// an error. The result is sorted by display name, case-sensitive
    /// lexicographic ascending.
    pub async fn meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, FetchError> {
        let mut meals: Vec<MealSummary> =
            self.get_meals("filter.php", &[("c", category)]).await?;
        meals.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("category {category}: {} meals", meals.len());
        Ok(meals)
    }

    /// Fetch the full record for a meal id.
    ///
    /// An empty or null `meals` array yields [`FetchError::NotFound`],
    /// distinct from transport and decode failures.
    pub async fn meal_detail(&self, id: &str) -> Result<MealDetail, FetchError> {
        let meals: Vec<MealDetail> = self.get_meals("lookup.php", &[("i", id)]).await?;
        meals
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound { id: id.to_owned() })
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {url}");
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Decode from the body text so malformed JSON surfaces as a decode
        // failure rather than a transport error.
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn meals_by_category(&self, category: &str) -> Result<Vec<MealSummary>, FetchError> {
        MealDbClient::meals_by_category(self, category).await
    }

    async fn meal_detail(&self, id: &str) -> Result<MealDetail, FetchError> {
        MealDbClient::meal_detail(self, id).await
    }
}
