use std::{sync::Arc, time::Duration};

use crate::config::AppConfig;
use crate::db;
use crate::favorites::{FavoritesStore, PgFavoritesStore};
use crate::recipes::{MealDbClient, MealSource};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub meals: Arc<dyn MealSource>,
}

impl AppState {
    /// Connects to Postgres, applies migrations and builds the MealDB client.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(&config).await?;
        db::migrate(&pool).await?;

        let meals = MealDbClient::new(
            config.mealdb_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?;

        Ok(Self::from_parts(
            Arc::new(config),
            Arc::new(PgFavoritesStore::new(pool)),
            Arc::new(meals),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        favorites: Arc<dyn FavoritesStore>,
        meals: Arc<dyn MealSource>,
    ) -> Self {
        Self {
            config,
            favorites,
            meals,
        }
    }

    #[cfg(test)]
    pub fn fake(
        favorites: Arc<dyn FavoritesStore>,
        meals: impl MealSource + 'static,
    ) -> Self {
        Self::from_parts(Arc::new(AppConfig::test()), favorites, Arc::new(meals))
    }
}
