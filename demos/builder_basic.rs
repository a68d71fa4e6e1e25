//! Basic usage of the RecipeSearch builder API
//!
//! This example demonstrates the main use cases:
//! 1. Free text that names an area → that area's recipes
//! 2. Free text → name suggestions split into "starts with" / "contains"
//! 3. Recipe id → details with the ingredient table

use mealdb_search::{RecipeSearch, SearchResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Use Case 1: Area ===");
    let result = RecipeSearch::builder().query("japanese").build().await?;
    if let SearchResult::Area { area, recipes } = result {
        println!("{} recipes from {}", recipes.len(), area);
        for recipe in recipes.iter().take(5) {
            println!("  - {}", recipe.name());
        }
    }

    println!("\n=== Use Case 2: Name suggestions ===");
    let result = RecipeSearch::builder().query("cake").build().await?;
    if let SearchResult::Suggestions { suggestions, .. } = result {
        println!("Starts with:");
        for recipe in &suggestions.starts_with {
            println!("  - {}", recipe.name());
        }
        println!("Contains:");
        for recipe in &suggestions.contains {
            println!("  - {}", recipe.name());
        }
    }

    println!("\n=== Use Case 3: Recipe details ===");
    let details = mealdb_search::recipe_details("52772").await?;
    println!("{}", details.name());
    for line in &details.ingredients {
        println!("  {} {}", line.measure, line.ingredient);
    }

    Ok(())
}
