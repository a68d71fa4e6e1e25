//! Search-as-you-type against TheMealDB
//!
//! Simulates a user typing "chicken" one key at a time and prints every
//! state the suggestion dropdown goes through.

use std::sync::Arc;
use std::time::Duration;

use mealdb_search::{LiveSearch, LiveState, MealDbProvider, SearchConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SearchConfig::load()?;
    let provider = Arc::new(MealDbProvider::new(&config)?);
    let search = LiveSearch::new(provider, config.live.clone());
    let mut states = search.subscribe();

    let mut typed = String::new();
    for ch in "chicken".chars() {
        typed.push(ch);
        let seq = search.input(&typed);
        println!("typed {:<8} (#{})", typed, seq);
        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    loop {
        states.changed().await?;
        let state = states.borrow_and_update().clone();
        match state {
            LiveState::Loading { query, .. } => println!("loading '{}'...", query),
            LiveState::Ready {
                query, suggestions, ..
            } => {
                println!("suggestions for '{}':", query);
                for recipe in suggestions.all() {
                    println!("  - {}", recipe.name());
                }
                break;
            }
            LiveState::Failed { message, .. } => {
                println!("failed: {}", message);
                break;
            }
            LiveState::Idle => {}
        }
    }

    Ok(())
}
