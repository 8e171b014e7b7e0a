use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use super::repo::FavoritesStore;
use super::repo_types::{Favorite, NewFavorite, Saved};

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Favorite>,
}

/// In-process store with the same uniqueness rule as the `favorites` table.
#[derive(Default)]
pub struct MemoryFavoritesStore {
    inner: Mutex<Inner>,
    failing: bool,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails, as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn add(&self, new: NewFavorite) -> anyhow::Result<Saved> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner
            .rows
            .iter()
            .find(|f| f.user_id == new.user_id && f.recipe_id == new.recipe_id)
        {
            return Ok(Saved::Existing(existing.clone()));
        }
        inner.next_id += 1;
        let row = Favorite {
            id: inner.next_id,
            user_id: new.user_id,
            recipe_id: new.recipe_id,
            title: new.title,
            image: new.image,
            cook_time: new.cook_time,
            servings: new.servings,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.rows.push(row.clone());
        Ok(Saved::Created(row))
    }

    async fn remove(&self, user_id: &str, recipe_id: i32) -> anyhow::Result<u64> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner
            .rows
            .retain(|f| !(f.user_id == user_id && f.recipe_id == recipe_id));
        Ok((before - inner.rows.len()) as u64)
    }

    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }
}
