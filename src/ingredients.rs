use serde::Serialize;

use crate::model::RecipeRecord;

/// Number of numbered ingredient/measure slots on a catalog record
pub const INGREDIENT_SLOTS: usize = 20;

/// One row of a recipe's ingredient table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

impl IngredientLine {
    pub fn new(ingredient: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            measure: measure.into(),
        }
    }
}

/// Collect the filled `strIngredientN` / `strMeasureN` slots in slot order.
///
/// Blank slots are skipped without ending the scan. Values are returned as
/// stored on the record; trimming only decides whether a slot is blank.
pub fn extract_ingredients(record: &RecipeRecord) -> Vec<IngredientLine> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = record.field(&format!("strIngredient{}", slot))?;
            if ingredient.trim().is_empty() {
                return None;
            }
            let measure = record
                .field(&format!("strMeasure{}", slot))
                .unwrap_or_default();
            Some(IngredientLine::new(ingredient, measure))
        })
        .collect()
}
