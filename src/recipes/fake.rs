use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use serde_json::json;

use super::source::MealSource;
use super::wire::{CategoryRecord, MealRecord};

pub fn meal(id: u32, name: &str) -> MealRecord {
    serde_json::from_value(json!({
        "idMeal": id.to_string(),
        "strMeal": name,
        "strMealThumb": format!("https://img.example/{id}.jpg"),
        "strInstructions": "Cook.\r\nServe.",
        "strIngredient1": "salt",
        "strMeasure1": "1 tsp",
    }))
    .unwrap()
}

/// Canned TheMealDB answers keyed by query, recording every call.
#[derive(Default)]
pub struct FakeMealSource {
    by_name: HashMap<String, Vec<MealRecord>>,
    by_ingredient: HashMap<String, Vec<MealRecord>>,
    by_category: HashMap<String, Vec<MealRecord>>,
    random: Vec<MealRecord>,
    categories: Vec<CategoryRecord>,
    failing: bool,
    next_random: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl FakeMealSource {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, query: &str, meals: Vec<MealRecord>) -> Self {
        self.by_name.insert(query.to_string(), meals);
        self
    }

    pub fn with_ingredient(mut self, query: &str, meals: Vec<MealRecord>) -> Self {
        self.by_ingredient.insert(query.to_string(), meals);
        self
    }

    pub fn with_category(mut self, category: &str, meals: Vec<MealRecord>) -> Self {
        self.by_category.insert(category.to_string(), meals);
        self
    }

    pub fn with_random(mut self, meals: impl IntoIterator<Item = MealRecord>) -> Self {
        self.random.extend(meals);
        self
    }

    pub fn with_categories(mut self, names: &[&str]) -> Self {
        self.categories = names
            .iter()
            .enumerate()
            .map(|(i, name)| CategoryRecord {
                id: Some((i + 1).to_string()),
                name: Some(name.to_string()),
                thumbnail: None,
                description: None,
            })
            .collect();
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, kind: &str) -> usize {
        let prefix = format!("{kind}:");
        self.queries().iter().filter(|c| c.starts_with(&prefix)).count()
    }

    fn record(&self, kind: &str, arg: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(format!("{kind}:{arg}"));
        if self.failing {
            anyhow::bail!("mealdb unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl MealSource for FakeMealSource {
    async fn search_by_name(&self, query: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.record("name", query)?;
        Ok(self.by_name.get(query).cloned().unwrap_or_default())
    }

    async fn lookup_by_id(&self, id: &str) -> anyhow::Result<Option<MealRecord>> {
        self.record("lookup", id)?;
        Ok(self
            .by_name
            .values()
            .flatten()
            .chain(self.random.iter())
            .find(|m| m.id.as_deref() == Some(id))
            .cloned())
    }

    async fn random_meal(&self) -> anyhow::Result<Option<MealRecord>> {
        self.record("random", "")?;
        if self.random.is_empty() {
            return Ok(None);
        }
        let i = self.next_random.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.random[i % self.random.len()].clone()))
    }

    async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>> {
        self.record("categories", "")?;
        Ok(self.categories.clone())
    }

    async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.record("category", category)?;
        Ok(self.by_category.get(category).cloned().unwrap_or_default())
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.record("ingredient", ingredient)?;
        Ok(self.by_ingredient.get(ingredient).cloned().unwrap_or_default())
    }
}
