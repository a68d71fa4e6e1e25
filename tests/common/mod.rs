#![allow(dead_code)]

use async_trait::async_trait;
use mealdb_search::{Area, Category, RecipeProvider, RecipeRecord, SearchError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub fn meal(id: &str, name: &str) -> RecipeRecord {
    RecipeRecord::from_pairs([("idMeal", id), ("strMeal", name)])
}

pub fn meals(names: &[&str]) -> Vec<RecipeRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| meal(&(i + 1).to_string(), name))
        .collect()
}

/// In-memory provider with per-query latency and a call log
#[derive(Default)]
pub struct FakeProvider {
    by_name: HashMap<String, Vec<RecipeRecord>>,
    by_area: HashMap<String, Vec<RecipeRecord>>,
    by_category: HashMap<String, Vec<RecipeRecord>>,
    by_id: HashMap<String, RecipeRecord>,
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, query: &str, records: Vec<RecipeRecord>) -> Self {
        self.by_name.insert(query.to_string(), records);
        self
    }

    pub fn with_area(mut self, area: &str, records: Vec<RecipeRecord>) -> Self {
        self.by_area.insert(area.to_string(), records);
        self
    }

    pub fn with_category(mut self, category: &str, records: Vec<RecipeRecord>) -> Self {
        self.by_category.insert(category.to_string(), records);
        self
    }

    pub fn with_recipe(mut self, record: RecipeRecord) -> Self {
        let id = record.id().unwrap_or_default().to_string();
        self.by_id.insert(id, record);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.push(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn record_call(&self, call: String, key: &str) -> Result<(), SearchError> {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.iter().any(|f| f == key) {
            return Err(SearchError::ParseError(format!("fake failure for {}", key)));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeProvider for FakeProvider {
    fn provider_name(&self) -> &str {
        "fake"
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.record_call(format!("name:{}", name), name).await?;
        Ok(self.by_name.get(name).cloned().unwrap_or_default())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<RecipeRecord>, SearchError> {
        self.record_call(format!("id:{}", id), id).await?;
        Ok(self.by_id.get(id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, SearchError> {
        self.record_call("categories".to_string(), "categories").await?;
        Ok(Vec::new())
    }

    async fn list_areas(&self) -> Result<Vec<Area>, SearchError> {
        self.record_call("areas".to_string(), "areas").await?;
        Ok(Vec::new())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.record_call(format!("category:{}", category), category)
            .await?;
        Ok(self.by_category.get(category).cloned().unwrap_or_default())
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeRecord>, SearchError> {
        self.record_call(format!("area:{}", area), area).await?;
        Ok(self.by_area.get(area).cloned().unwrap_or_default())
    }
}
