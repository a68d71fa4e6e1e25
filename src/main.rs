use log::{debug, error};
use std::env;
use std::sync::Arc;

use mealdb_search::flags::FALLBACK_FLAG_GLYPH;
use mealdb_search::{
    area_flag_url, MealDbProvider, RecipeDetails, RecipeProvider, RecipeRecord, RecipeSearch,
    SearchConfig, SearchResult,
};

const USAGE: &str = "Usage:
  mealdb-search <query>            search by name, or list an area's recipes
  mealdb-search --recipe <id>      show one recipe with its ingredients
  mealdb-search --category <name>  list the recipes of a category
  mealdb-search --area <name>      list the recipes of an area
  mealdb-search --categories       list all categories
  mealdb-search --areas            list all areas";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = SearchConfig::load()?;
    debug!("{:#?}", config);

    let provider: Arc<dyn RecipeProvider> = Arc::new(MealDbProvider::new(&config)?);
    let search = RecipeSearch::builder()
        .config(&config)
        .provider(Arc::clone(&provider));

    let search = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["--categories"] => {
            for category in provider.list_categories().await? {
                println!("{}\n    {}", category.name, category.short_description(100));
            }
            return Ok(());
        }
        ["--areas"] => {
            for area in provider.list_areas().await? {
                let flag = area
                    .flag_url(config.flag_width)
                    .unwrap_or_else(|| FALLBACK_FLAG_GLYPH.to_string());
                println!("{:<16} {}", area.name, flag);
            }
            return Ok(());
        }
        ["--recipe", id] => search.recipe(*id),
        ["--category", name] => search.category(*name),
        ["--area", name] => search.area(*name),
        [] => {
            eprintln!("{}", USAGE);
            return Err("Please provide a search query".into());
        }
        [first, ..] if first.starts_with("--") => {
            eprintln!("{}", USAGE);
            return Err(format!("Unknown option: {}", first).into());
        }
        words => search.query(words.join(" ")),
    };

    match search.build().await {
        Ok(SearchResult::Suggestions { query, suggestions }) => {
            if suggestions.is_empty() {
                println!("No recipes found for '{}'", query);
            }
            if !suggestions.starts_with.is_empty() {
                println!("Starts with '{}':", query);
                suggestions.starts_with.iter().for_each(print_record);
            }
            if !suggestions.contains.is_empty() {
                println!("Contains '{}':", query);
                suggestions.contains.iter().for_each(print_record);
            }
        }
        Ok(SearchResult::Area { area, recipes }) => {
            let flag = area_flag_url(&area, config.flag_width)
                .unwrap_or_else(|| FALLBACK_FLAG_GLYPH.to_string());
            println!("{} recipes ({}):", area, flag);
            recipes.iter().for_each(print_record);
        }
        Ok(SearchResult::Category { category, recipes }) => {
            println!("{} recipes:", category);
            recipes.iter().for_each(print_record);
        }
        Ok(SearchResult::Recipe(details)) => print_details(&details),
        Err(e) => {
            error!("Search failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

fn print_record(record: &RecipeRecord) {
    let id = record.id().unwrap_or("?");
    match record.caption() {
        Some(caption) => println!("  [{}] {} ({})", id, record.name(), caption),
        None => println!("  [{}] {}", id, record.name()),
    }
}

fn print_details(details: &RecipeDetails) {
    let record = &details.record;
    println!("{}", details.name());
    if let Some(caption) = record.caption() {
        println!("{}", caption);
    }
    if let Some(video) = details.youtube_embed_url() {
        println!("Video: {}", video);
    }

    println!("\nIngredients:");
    for line in &details.ingredients {
        println!("  {:<24} {}", line.ingredient, line.measure);
    }

    if let Some(instructions) = record.instructions() {
        println!("\nInstructions:\n{}", instructions);
    }
}
