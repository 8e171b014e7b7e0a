use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::source::MealSource;
use super::wire::{CategoriesEnvelope, CategoryRecord, MealRecord, MealsEnvelope};

/// HTTP client for the TheMealDB v1 JSON API.
#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("recipe-box/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GET {url}: HTTP {status}");
        }
        debug!(%url, ?query, "mealdb response");
        response
            .json::<T>()
            .await
            .with_context(|| format!("decode {url}"))
    }

    async fn meals(&self, path: &str, query: &[(&str, &str)]) -> anyhow::Result<Vec<MealRecord>> {
        Ok(self.get_json::<MealsEnvelope>(path, query).await?.meals)
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn search_by_name(&self, query: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.meals("search.php", &[("s", query)]).await
    }

    async fn lookup_by_id(&self, id: &str) -> anyhow::Result<Option<MealRecord>> {
        Ok(self.meals("lookup.php", &[("i", id)]).await?.into_iter().next())
    }

    async fn random_meal(&self) -> anyhow::Result<Option<MealRecord>> {
        Ok(self.meals("random.php", &[]).await?.into_iter().next())
    }

    async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>> {
        Ok(self
            .get_json::<CategoriesEnvelope>("categories.php", &[])
            .await?
            .categories)
    }

    async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.meals("filter.php", &[("c", category)]).await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> anyhow::Result<Vec<MealRecord>> {
        self.meals("filter.php", &[("i", ingredient)]).await
    }
}
