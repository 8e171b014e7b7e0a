use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod debounce;
pub mod dto;
#[cfg(test)]
pub(crate) mod fake;
pub mod handlers;
pub mod normalize;
pub mod services;
pub mod source;
pub mod wire;

pub use client::MealDbClient;
pub use source::MealSource;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
