use mealdb_browser::{FetchError, MealDbClient};
use mockito::Matcher;

fn client_for(server: &mockito::ServerGuard) -> MealDbClient {
    MealDbClient::builder()
        .base_url(server.url())
        .build()
        .unwrap()
}

fn crumble_body() -> &'static str {
    // Trimmed from a real lookup.php response: filled slots 1..=6, an
    // empty-string pair at 7, and nulls from 8 on.
    r#"
    {
        "meals": [
            {
                "idMeal": "52893",
                "strMeal": "Apple & Blackberry Crumble",
                "strCategory": "Dessert",
                "strArea": "British",
                "strInstructions": "Heat oven to 190C/170C fan/gas 5. Tip the flour and sugar into a large bowl.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/xvsurr1511719182.jpg",
                "strIngredient1": "Plain Flour",
                "strIngredient2": "Caster Sugar",
                "strIngredient3": "Butter",
                "strIngredient4": "Braeburn Apples",
                "strIngredient5": "Butter",
                "strIngredient6": "Demerara Sugar",
                "strIngredient7": "",
                "strIngredient8": null,
                "strIngredient9": null,
                "strMeasure1": "120g",
                "strMeasure2": "60g",
                "strMeasure3": "60g",
                "strMeasure4": "300g",
                "strMeasure5": "30g",
                "strMeasure6": "30g",
                "strMeasure7": "",
                "strMeasure8": null,
                "strMeasure9": null
            }
        ]
    }
    "#
}

#[tokio::test]
async fn test_detail_flattens_numbered_fields() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52893".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(crumble_body())
        .create();

    let detail = client_for(&server).meal_detail("52893").await.unwrap();

    assert_eq!(detail.id, "52893");
    assert_eq!(detail.name, "Apple & Blackberry Crumble");
    assert!(detail.instructions.starts_with("Heat oven to 190C"));

    // Six complete pairs, in field-index order; the empty pair at index 7
    // and the nulls beyond are dropped. "Butter" appears twice and both
    // entries survive.
    assert_eq!(detail.ingredients.len(), 6);
    let names: Vec<&str> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Plain Flour",
            "Caster Sugar",
            "Butter",
            "Braeburn Apples",
            "Butter",
            "Demerara Sugar"
        ]
    );
    assert_eq!(detail.ingredients[3].measure, "300g");
}

#[tokio::test]
async fn test_refetch_yields_identical_detail() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52893".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(crumble_body())
        .expect(2)
        .create();

    let client = client_for(&server);
    let first = client.meal_detail("52893").await.unwrap();
    let second = client.meal_detail("52893").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_array_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "99999".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": []}"#)
        .create();

    let error = client_for(&server).meal_detail("99999").await.unwrap_err();

    assert!(error.is_not_found());
    assert!(matches!(error, FetchError::NotFound { ref id } if id == "99999"));
}

#[tokio::test]
async fn test_null_meals_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create();

    let error = client_for(&server).meal_detail("1").await.unwrap_err();

    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_non_string_ingredient_field_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"
    {
        "meals": [
            {
                "idMeal": "1",
                "strMeal": "Broken",
                "strInstructions": "n/a",
                "strIngredient1": 42,
                "strMeasure1": "1 cup"
            }
        ]
    }
    "#;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let error = client_for(&server).meal_detail("1").await.unwrap_err();

    // No partial-record recovery: the whole lookup fails to decode.
    assert!(matches!(error, FetchError::Decode(_)));
    assert!(!error.is_not_found());
}
