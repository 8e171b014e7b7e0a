use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::debounce::debounce;
use super::dto::{HomeFeed, Recipe};
use super::normalize::{normalize, normalize_all, normalize_categories};
use super::source::MealSource;
use super::wire::MealRecord;

/// Upper bound on recipes returned by search and the home feed.
pub const RESULT_LIMIT: usize = 12;

/// Quiet period used for search-as-you-type.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(600);

/// `count` concurrent `random.php` calls; failed or empty calls are dropped.
pub async fn random_meals<S>(source: &S, count: usize) -> Vec<MealRecord>
where
    S: MealSource + ?Sized,
{
    let calls = (0..count).map(|_| source.random_meal());
    join_all(calls)
        .await
        .into_iter()
        .filter_map(|res| match res {
            Ok(meal) => meal,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "random meal fetch failed");
                None
            }
        })
        .collect()
}

/// Blank query: random recipes. Otherwise name search, falling back to
/// ingredient filter when the name search finds nothing.
pub async fn search<S>(source: &S, query: &str) -> anyhow::Result<Vec<Recipe>>
where
    S: MealSource + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        let meals = random_meals(source, RESULT_LIMIT).await;
        return Ok(normalize_all(&meals));
    }

    let mut meals = source.search_by_name(query).await?;
    if meals.is_empty() {
        debug!(%query, "no name matches, trying ingredient");
        meals = source.filter_by_ingredient(query).await?;
    }
    meals.truncate(RESULT_LIMIT);
    Ok(normalize_all(&meals))
}

pub async fn recipe_by_id<S>(source: &S, id: &str) -> anyhow::Result<Option<Recipe>>
where
    S: MealSource + ?Sized,
{
    let meal = source.lookup_by_id(id.trim()).await?;
    Ok(normalize(meal.as_ref()))
}

pub async fn recipes_in_category<S>(source: &S, category: &str) -> anyhow::Result<Vec<Recipe>>
where
    S: MealSource + ?Sized,
{
    let meals = source.filter_by_category(category.trim()).await?;
    Ok(normalize_all(&meals))
}

/// Categories, a batch of random recipes and one featured recipe, fetched
/// together. Any failure fails the whole feed.
pub async fn home_feed<S>(source: &S) -> anyhow::Result<HomeFeed>
where
    S: MealSource + ?Sized,
{
    let (categories, meals, featured) = tokio::try_join!(
        source.categories(),
        async { Ok::<_, anyhow::Error>(random_meals(source, RESULT_LIMIT).await) },
        source.random_meal(),
    )?;

    Ok(HomeFeed {
        categories: normalize_categories(&categories),
        recipes: normalize_all(&meals),
        featured: normalize(featured.as_ref()),
    })
}

/// Debounces raw query input and runs [`search`] once per settled query.
pub fn live_search<S>(
    source: Arc<S>,
    queries: mpsc::Receiver<String>,
    delay: Duration,
) -> mpsc::Receiver<anyhow::Result<Vec<Recipe>>>
where
    S: MealSource + ?Sized + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    let mut settled = debounce(queries, delay);
    tokio::spawn(async move {
        while let Some(query) = settled.recv().await {
            let result = search(source.as_ref(), &query).await;
            if tx.send(result).await.is_err() {
                break;
            }
        }
    });
    rx
}
