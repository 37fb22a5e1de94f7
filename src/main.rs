use std::env;
use std::sync::Arc;
use std::time::Duration;

use mealdb_browser::{BrowserConfig, MealBrowser, MealDbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BrowserConfig::load()?;

    // Optional category and meal id from command-line arguments
    let args: Vec<String> = env::args().collect();
    let category = args.get(1).cloned().unwrap_or_else(|| config.category.clone());
    let meal_id = args.get(2);

    let client = MealDbClient::builder()
        .base_url(&config.base_url)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;

    let mut browser = MealBrowser::new(Arc::new(client));

    browser.load_meals(&category);
    browser.tick().await;

    if browser.meals().is_empty() {
        match browser.last_error() {
            Some(error) => eprintln!("Unable to load {category}: {error}"),
            None => println!("No meals found for category {category}."),
        }
    } else {
        println!("{category}:");
        for meal in browser.meals() {
            println!("  {}  {}", meal.id, meal.name);
        }
    }

    if let Some(id) = meal_id {
        browser.load_detail(id);
        browser.tick().await;

        match browser.selected_detail() {
            Some(detail) => {
                println!();
                println!("{}", detail.name);
                println!();
                for ingredient in &detail.ingredients {
                    println!("  {:<28} {}", ingredient.name, ingredient.measure);
                }
                println!();
                println!("{}", detail.instructions);
            }
            None => println!("Unable to retrieve. Please try again later."),
        }
    }

    Ok(())
}
