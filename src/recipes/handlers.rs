use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::dto::{Category, HomeFeed, Recipe, RecipeDetail};
use super::normalize::normalize_categories;
use super::services;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes/search", get(search_recipes))
        .route("/recipes/home", get(home))
        .route("/recipes/:id", get(get_recipe))
        .route("/categories", get(list_categories))
        .route("/categories/:name/recipes", get(category_recipes))
}

#[instrument(skip(state))]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = services::search(state.meals.as_ref(), &params.q).await?;
    info!(query = %params.q, found = recipes.len(), "recipe search");
    Ok(Json(recipes))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeDetail>> {
    services::recipe_by_id(state.meals.as_ref(), &id)
        .await?
        .map(|r| Json(RecipeDetail::from(r)))
        .ok_or_else(|| AppError::NotFound("Recipe not found".into()))
}

#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> ApiResult<Json<HomeFeed>> {
    Ok(Json(services::home_feed(state.meals.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let records = state.meals.categories().await?;
    Ok(Json(normalize_categories(&records)))
}

#[instrument(skip(state))]
pub async fn category_recipes(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = services::recipes_in_category(state.meals.as_ref(), &name).await?;
    Ok(Json(recipes))
}
