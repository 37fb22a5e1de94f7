use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The lookup endpoint carries at most this many numbered ingredient fields.
pub const INGREDIENT_SLOTS: usize = 20;

/// Minimal meal record returned by the category listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
}

/// One flattened ingredient/measure pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full meal record returned by the lookup endpoint.
///
/// The wire format spreads ingredients over numbered fields
/// (`strIngredient1..20`, `strMeasure1..20`); decoding collapses them into
/// `ingredients`, in field-index order, keeping only pairs where both sides
/// are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

/// Fixed fields decoded by derive; the numbered fields land in `extra`.
#[derive(Deserialize)]
struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for MealDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMealDetail::deserialize(deserializer)?;
        let ingredients = flatten_ingredients::<D::Error>(&raw.extra)?;
        Ok(MealDetail {
            id: raw.id,
            name: raw.name,
            instructions: raw.instructions,
            ingredients,
        })
    }
}

/// Walk indices 1..=20 building the numbered keys by hand; a pair is kept
/// only when both fields decode to non-empty strings. A present field that
/// is neither a string nor null fails the whole record.
fn flatten_ingredients<E: de::Error>(fields: &Map<String, Value>) -> Result<Vec<Ingredient>, E> {
    let mut pairs = Vec::new();
    for index in 1..=INGREDIENT_SLOTS {
        let name = string_field::<E>(fields, &format!("strIngredient{index}"))?;
        let measure = string_field::<E>(fields, &format!("strMeasure{index}"))?;
        if let (Some(name), Some(measure)) = (name, measure) {
            if !name.is_empty() && !measure.is_empty() {
                pairs.push(Ingredient {
                    name: name.to_owned(),
                    measure: measure.to_owned(),
                });
            }
        }
    }
    Ok(pairs)
}

fn string_field<'a, E: de::Error>(
    fields: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, E> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(E::custom(format!(
            "invalid type for {key}: expected a string, got {other}"
        ))),
    }
}
