use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateFavoriteRequest, MessageResponse};
use super::repo_types::{Favorite, Saved};
use crate::error::{ApiResult, AppError};
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(add_favorite))
        .route("/favorites/:user_id", get(list_favorites))
        .route("/favorites/:user_id/:recipe_id", delete(remove_favorite))
}

#[instrument(skip(state, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<Favorite>)> {
    let new = payload.validate()?;
    match state.favorites.add(new).await? {
        Saved::Created(fav) => {
            info!(user_id = %fav.user_id, recipe_id = fav.recipe_id, id = fav.id, "favorite added");
            Ok((StatusCode::CREATED, Json(fav)))
        }
        Saved::Existing(fav) => {
            info!(user_id = %fav.user_id, recipe_id = fav.recipe_id, "favorite already saved");
            Ok((StatusCode::OK, Json(fav)))
        }
    }
}

#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    let recipe_id: i32 = recipe_id
        .trim()
        .parse()
        .map_err(|_| AppError::validation("Invalid recipeId"))?;

    let removed = state.favorites.remove(&user_id, recipe_id).await?;
    info!(%user_id, recipe_id, removed, "favorite removed");

    Ok(Json(MessageResponse {
        message: "Favorite removed successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Favorite>>> {
    let rows = state.favorites.list_by_user(&user_id).await?;
    Ok(Json(rows))
}
