use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::flags;
use crate::ingredients::{extract_ingredients, IngredientLine};

pub const FIELD_ID: &str = "idMeal";
pub const FIELD_NAME: &str = "strMeal";
pub const FIELD_THUMBNAIL: &str = "strMealThumb";
pub const FIELD_CATEGORY: &str = "strCategory";
pub const FIELD_AREA: &str = "strArea";
pub const FIELD_INSTRUCTIONS: &str = "strInstructions";
pub const FIELD_YOUTUBE: &str = "strYoutube";

/// One recipe as returned by the catalog, keyed by the API's field names.
///
/// The record is kept opaque: only string values are ever read, anything else
/// (including `null`) behaves like a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeRecord {
    fields: Map<String, Value>,
}

impl RecipeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Value::String(value.into()));
    }

    /// Set `key` only when the record carries no string value for it yet
    pub fn fill_field(&mut self, key: &str, value: &str) {
        if self.field(key).map_or(true, |v| v.trim().is_empty()) {
            self.set_field(key, value);
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.field(FIELD_ID)
    }

    /// Display name, empty when the record has none
    pub fn name(&self) -> &str {
        self.field(FIELD_NAME).unwrap_or_default()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.field(FIELD_THUMBNAIL)
    }

    pub fn category(&self) -> Option<&str> {
        self.field(FIELD_CATEGORY).filter(|c| !c.is_empty())
    }

    pub fn area(&self) -> Option<&str> {
        self.field(FIELD_AREA).filter(|a| !a.is_empty())
    }

    pub fn instructions(&self) -> Option<&str> {
        self.field(FIELD_INSTRUCTIONS)
    }

    pub fn youtube(&self) -> Option<&str> {
        self.field(FIELD_YOUTUBE).filter(|y| !y.is_empty())
    }

    /// "Category - Area" caption, or whichever half is known
    pub fn caption(&self) -> Option<String> {
        match (self.category(), self.area()) {
            (Some(c), Some(a)) => Some(format!("{} - {}", c, a)),
            (Some(c), None) => Some(c.to_string()),
            (None, Some(a)) => Some(a.to_string()),
            (None, None) => None,
        }
    }
}

/// A recipe category from `categories.php`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail_url: String,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: String,
}

impl Category {
    /// First `max_chars` characters of the description followed by `...`
    pub fn short_description(&self, max_chars: usize) -> String {
        let mut short: String = self.description.chars().take(max_chars).collect();
        short.push_str("...");
        short
    }
}

/// A cuisine area from `list.php?a=list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "strArea")]
    pub name: String,
}

impl Area {
    pub fn flag_url(&self, width: u32) -> Option<String> {
        flags::area_flag_url(&self.name, width)
    }
}

/// A fully fetched recipe together with its ingredient table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetails {
    pub record: RecipeRecord,
    pub ingredients: Vec<IngredientLine>,
}

impl From<RecipeRecord> for RecipeDetails {
    fn from(record: RecipeRecord) -> Self {
        let ingredients = extract_ingredients(&record);
        Self {
            record,
            ingredients,
        }
    }
}

impl RecipeDetails {
    pub fn name(&self) -> &str {
        self.record.name()
    }

    /// YouTube link rewritten to its embeddable form
    pub fn youtube_embed_url(&self) -> Option<String> {
        self.record
            .youtube()
            .map(|url| url.replace("watch?v=", "embed/"))
    }

    pub fn flag_url(&self, width: u32) -> Option<String> {
        self.record
            .area()
            .and_then(|area| flags::area_flag_url(area, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_api_json() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": null,
            "strSource": null
        }"#;

        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), Some("52772"));
        assert_eq!(record.name(), "Teriyaki Chicken Casserole");
        assert_eq!(record.field("strIngredient2"), None);
        assert_eq!(record.field("strSource"), None);
        assert_eq!(record.caption().as_deref(), Some("Chicken - Japanese"));
    }

    #[test]
    fn test_missing_name_is_empty() {
        let record = RecipeRecord::new().with_field(FIELD_ID, "1");
        assert_eq!(record.name(), "");
        assert!(record.caption().is_none());
    }

    #[test]
    fn test_fill_field_keeps_existing_value() {
        let mut record = RecipeRecord::from_pairs([(FIELD_AREA, "Thai")]);
        record.fill_field(FIELD_AREA, "French");
        record.fill_field(FIELD_CATEGORY, "Seafood");
        assert_eq!(record.area(), Some("Thai"));
        assert_eq!(record.category(), Some("Seafood"));
    }

    #[test]
    fn test_category_short_description() {
        let category = Category {
            id: "1".to_string(),
            name: "Beef".to_string(),
            thumbnail_url: String::new(),
            description: "Crème brûlée is not beef".to_string(),
        };
        assert_eq!(category.short_description(5), "Crème...");
        assert_eq!(category.short_description(100), "Crème brûlée is not beef...");
    }

    #[test]
    fn test_details_youtube_embed() {
        let record = RecipeRecord::from_pairs([
            (FIELD_NAME, "Pad Thai"),
            (FIELD_AREA, "Thai"),
            (FIELD_YOUTUBE, "https://www.youtube.com/watch?v=abc123"),
            ("strIngredient1", "Rice noodles"),
        ]);
        let details = RecipeDetails::from(record);

        assert_eq!(
            details.youtube_embed_url().as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(
            details.flag_url(48).as_deref(),
            Some("https://flagcdn.com/48x36/th.png")
        );
        assert_eq!(details.ingredients.len(), 1);
    }
}
