use serde::{Deserialize, Serialize};

use super::repo_types::NewFavorite;
use crate::error::AppError;

pub use crate::error::MISSING_FIELDS;

/// A JSON scalar that clients send either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn into_text(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }

    /// Integer value; `Ok(None)` for zero or blank (treated as absent).
    fn as_recipe_id(&self) -> Result<Option<i32>, ()> {
        let n = match self {
            Scalar::Int(n) => *n,
            Scalar::Float(f) if f.fract() == 0.0 => *f as i64,
            Scalar::Float(_) => return Err(()),
            Scalar::Text(s) if s.trim().is_empty() => return Ok(None),
            Scalar::Text(s) => s.trim().parse::<i64>().map_err(|_| ())?,
        };
        if n == 0 {
            return Ok(None);
        }
        i32::try_from(n).map(Some).map_err(|_| ())
    }
}

/// Request body for `POST /api/favorites`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    pub user_id: Option<String>,
    pub recipe_id: Option<Scalar>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub cook_time: Option<Scalar>,
    pub servings: Option<Scalar>,
}

impl CreateFavoriteRequest {
    pub fn validate(self) -> Result<NewFavorite, AppError> {
        let user_id = self.user_id.filter(|s| !s.trim().is_empty());
        let title = self.title.filter(|s| !s.trim().is_empty());
        let recipe_id = match self.recipe_id {
            Some(raw) => raw
                .as_recipe_id()
                .map_err(|_| AppError::validation("Invalid recipeId"))?,
            None => None,
        };

        let (Some(user_id), Some(recipe_id), Some(title)) = (user_id, recipe_id, title) else {
            return Err(AppError::validation(MISSING_FIELDS));
        };

        Ok(NewFavorite {
            user_id,
            recipe_id,
            title,
            image: self.image,
            cook_time: self.cook_time.map(Scalar::into_text),
            servings: self.servings.map(Scalar::into_text),
        })
    }
}

/// Response body for a removal.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
