use anyhow::Context;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::repo_types::{Favorite, NewFavorite, Saved};

#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn add(&self, new: NewFavorite) -> anyhow::Result<Saved>;
    /// Returns the number of deleted rows; zero is not an error.
    async fn remove(&self, user_id: &str, recipe_id: i32) -> anyhow::Result<u64>;
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>>;
}

#[derive(Clone)]
pub struct PgFavoritesStore {
    db: PgPool,
}

impl PgFavoritesStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    favorite: Favorite,
    inserted: bool,
}

#[async_trait]
impl FavoritesStore for PgFavoritesStore {
    async fn add(&self, new: NewFavorite) -> anyhow::Result<Saved> {
        // The conflict branch rewrites user_id with its own value so the
        // existing row comes back from the same statement; xmax = 0 only
        // for a freshly inserted row.
        let row = sqlx::query_as::<_, UpsertRow>(
            r#"
            INSERT INTO favorites (user_id, recipe_id, title, image, cook_time, servings)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, recipe_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, recipe_id, title, image, cook_time, servings, created_at,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(&new.user_id)
        .bind(new.recipe_id)
        .bind(&new.title)
        .bind(&new.image)
        .bind(&new.cook_time)
        .bind(&new.servings)
        .fetch_one(&self.db)
        .await
        .context("insert favorite")?;

        Ok(if row.inserted {
            Saved::Created(row.favorite)
        } else {
            Saved::Existing(row.favorite)
        })
    }

    async fn remove(&self, user_id: &str, recipe_id: i32) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2"#)
            .bind(user_id)
            .bind(recipe_id)
            .execute(&self.db)
            .await
            .context("delete favorite")?;
        Ok(res.rows_affected())
    }

    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>> {
        let rows = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, recipe_id, title, image, cook_time, servings, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("list favorites by user")?;
        Ok(rows)
    }
}

// Needs a reachable Postgres in DATABASE_URL:
// `cargo test --features pg-tests`
#[cfg(all(test, feature = "pg-tests"))]
mod pg_tests {
    use super::*;

    fn new_favorite(user_id: &str, recipe_id: i32, title: &str) -> NewFavorite {
        NewFavorite {
            user_id: user_id.into(),
            recipe_id,
            title: title.into(),
            image: None,
            cook_time: Some("30 minutes".into()),
            servings: Some("4".into()),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn duplicate_pair_returns_existing_row_unchanged(pool: PgPool) {
        let store = PgFavoritesStore::new(pool);

        let first = match store.add(new_favorite("u1", 52772, "Teriyaki")).await.unwrap() {
            Saved::Created(f) => f,
            other => panic!("expected created, got {other:?}"),
        };
        let second = store.add(new_favorite("u1", 52772, "Renamed")).await.unwrap();

        assert_eq!(second, Saved::Existing(first.clone()));
        assert_eq!(store.list_by_user("u1").await.unwrap(), vec![first]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn remove_matches_user_and_recipe(pool: PgPool) {
        let store = PgFavoritesStore::new(pool);
        store.add(new_favorite("u1", 1, "a")).await.unwrap();
        store.add(new_favorite("u2", 1, "b")).await.unwrap();
        store.add(new_favorite("u1", 2, "c")).await.unwrap();

        assert_eq!(store.remove("u1", 1).await.unwrap(), 1);
        assert_eq!(store.remove("u1", 1).await.unwrap(), 0);
        assert_eq!(store.remove("u3", 2).await.unwrap(), 0);

        let u1: Vec<i32> = store
            .list_by_user("u1")
            .await
            .unwrap()
            .iter()
            .map(|f| f.recipe_id)
            .collect();
        assert_eq!(u1, vec![2]);
        assert_eq!(store.list_by_user("u2").await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_is_filtered_per_user(pool: PgPool) {
        let store = PgFavoritesStore::new(pool);
        for (user, recipe) in [("u1", 1), ("u2", 2), ("u1", 3)] {
            store.add(new_favorite(user, recipe, "t")).await.unwrap();
        }

        let rows = store.list_by_user("u1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|f| f.user_id == "u1"));
        assert!(store.list_by_user("nobody").await.unwrap().is_empty());
    }
}
