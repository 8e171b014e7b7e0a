use super::dto::{
    Category, Recipe, DEFAULT_CATEGORY, DEFAULT_COOK_TIME, DEFAULT_DESCRIPTION, DEFAULT_SERVINGS,
};
use super::wire::{CategoryRecord, MealRecord, INGREDIENT_SLOTS};

const DESCRIPTION_CHARS: usize = 120;

/// Maps an upstream meal into the display model. `None` only when there is no meal.
pub fn normalize(meal: Option<&MealRecord>) -> Option<Recipe> {
    let meal = meal?;
    let instructions_raw = meal.instructions.as_deref().filter(|s| !s.is_empty());

    Some(Recipe {
        id: meal.id.clone().unwrap_or_default(),
        title: meal.name.clone().unwrap_or_default(),
        description: match instructions_raw {
            Some(text) => {
                let mut head: String = text.chars().take(DESCRIPTION_CHARS).collect();
                head.push_str("...");
                head
            }
            None => DEFAULT_DESCRIPTION.to_string(),
        },
        image: meal.thumbnail.clone(),
        cook_time: DEFAULT_COOK_TIME.to_string(),
        servings: DEFAULT_SERVINGS,
        category: meal
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        area: meal.area.clone(),
        ingredients: ingredients(meal),
        instructions: instructions_raw.map(steps).unwrap_or_default(),
        original_data: meal.clone(),
    })
}

pub fn normalize_all(meals: &[MealRecord]) -> Vec<Recipe> {
    meals.iter().filter_map(|m| normalize(Some(m))).collect()
}

fn ingredients(meal: &MealRecord) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = meal.ingredient(slot).map(str::trim).filter(|s| !s.is_empty())?;
            match meal.measure(slot).map(str::trim).filter(|s| !s.is_empty()) {
                Some(measure) => Some(format!("{measure} {ingredient}")),
                None => Some(ingredient.to_string()),
            }
        })
        .collect()
}

// `lines` splits on both "\n" and "\r\n".
fn steps(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn normalize_categories(records: &[CategoryRecord]) -> Vec<Category> {
    records
        .iter()
        .enumerate()
        .map(|(i, c)| Category {
            id: i + 1,
            name: c.name.clone().unwrap_or_default(),
            image: c.thumbnail.clone(),
            description: c.description.clone(),
        })
        .collect()
}

/// `https://www.youtube.com/watch?v=ID&t=1` -> `https://www.youtube.com/embed/ID`
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("v=")?;
    let video_id = rest.split(['&', '#']).next()?.trim();
    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}
