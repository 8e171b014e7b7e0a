//! TheMealDB response shapes. Every field is optional upstream, and the
//! numbered ingredient/measure fields are kept in a map so a record can be
//! echoed back unchanged.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const INGREDIENT_SLOTS: usize = 20;

/// A meal as returned by `search.php`, `lookup.php`, `random.php` and `filter.php`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl MealRecord {
    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// `strIngredient{slot}`, slots are 1-based.
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.text(&format!("strIngredient{slot}"))
    }

    /// `strMeasure{slot}`, slots are 1-based.
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.text(&format!("strMeasure{slot}"))
    }
}

/// A category as returned by `categories.php`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "idCategory", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub meals: Vec<MealRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub categories: Vec<CategoryRecord>,
}

/// `null`, a missing key, or a non-list placeholder all mean "no match".
fn list_or_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(de)? {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
