use serde::Serialize;

use super::normalize::youtube_embed_url;
use super::wire::MealRecord;

pub const DEFAULT_COOK_TIME: &str = "30 minutes";
pub const DEFAULT_SERVINGS: u32 = 4;
pub const DEFAULT_CATEGORY: &str = "Main Course";
pub const DEFAULT_DESCRIPTION: &str = "Delicious meal from TheMealDB";

/// Display model derived from a [`MealRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    // upstream has no cook time or servings; these are fixed approximations
    pub cook_time: String,
    pub servings: u32,
    pub category: String,
    pub area: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub original_data: MealRecord,
}

impl Recipe {
    pub fn video_embed_url(&self) -> Option<String> {
        self.original_data.youtube.as_deref().and_then(youtube_embed_url)
    }
}

/// Recipe plus the video links shown on the detail view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub youtube_url: Option<String>,
    pub video_embed_url: Option<String>,
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        let youtube_url = recipe
            .original_data
            .youtube
            .clone()
            .filter(|u| !u.trim().is_empty());
        let video_embed_url = recipe.video_embed_url();
        Self {
            recipe,
            youtube_url,
            video_embed_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: usize,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub featured: Option<Recipe>,
}
