pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

use log::debug;

pub use browser::{MealBrowser, Update};
pub use client::{MealApi, MealDbClient, MealDbClientBuilder, DEFAULT_BASE_URL};
pub use config::BrowserConfig;
pub use error::FetchError;
pub use model::{Ingredient, MealDetail, MealSummary, INGREDIENT_SLOTS};

/// Fetch the meals in a category using a client with default settings.
pub async fn fetch_meals(category: &str) -> Result<Vec<MealSummary>, FetchError> {
    let client = MealDbClient::new()?;
    let meals = client.meals_by_category(category).await?;
    debug!("{meals:#?}");
    Ok(meals)
}

/// Fetch one meal's full record using a client with default settings.
pub async fn fetch_meal_detail(id: &str) -> Result<MealDetail, FetchError> {
    let client = MealDbClient::new()?;
    let detail = client.meal_detail(id).await?;
    debug!("{detail:#?}");
    Ok(detail)
}
