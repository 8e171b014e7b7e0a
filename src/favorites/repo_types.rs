use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Favorite record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: String,
    pub recipe_id: i32,
    pub title: String,
    pub image: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated input for a new favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub user_id: String,
    pub recipe_id: i32,
    pub title: String,
    pub image: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

/// Outcome of saving a favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Created(Favorite),
    /// The `(user_id, recipe_id)` pair was already saved; nothing was written.
    Existing(Favorite),
}
