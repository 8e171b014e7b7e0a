use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
pub mod repo;
pub mod repo_types;

pub use repo::{FavoritesStore, PgFavoritesStore};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
