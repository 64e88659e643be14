use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewPlace, NewReview, Place, PlaceWithReviews, Review};

/// Handle to the places and reviews tables.
///
/// Cloning is cheap; every clone shares the same connection pool. Lookups
/// that can miss return `Option` (or `bool`), so `Err` always means the
/// database itself failed.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Place>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM places ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Places with the most views first. Equal counts keep insertion order.
    pub async fn list_top_by_views(&self, limit: i64) -> Result<Vec<Place>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM places ORDER BY views DESC, id ASC LIMIT ?")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Place>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM places WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Load a place and eagerly fetch all of its reviews.
    pub async fn get_with_reviews(&self, id: i64) -> Result<Option<PlaceWithReviews>, sqlx::Error> {
        let Some(place) = self.get(id).await? else {
            return Ok(None);
        };

        let reviews = self.list_reviews_for_place(id).await?;

        Ok(Some(PlaceWithReviews { place, reviews }))
    }

    pub async fn create_place(&self, new: NewPlace) -> Result<Place, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        sqlx::query_as(
            r#"
            INSERT INTO places (name, description, location, image_url, views, created_at, updated_at)
            VALUES (?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.location)
        .bind(&new.image_url)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
    }

    /// Add one view. Returns `false` when no place has this id.
    pub async fn increment_views(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE places SET views = views + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reviews for a place, oldest first. Unknown places simply have none.
    pub async fn list_reviews_for_place(&self, place_id: i64) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM reviews WHERE place_id = ? ORDER BY id")
            .bind(place_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_review(&self, place_id: i64, new: NewReview) -> Result<Review, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        sqlx::query_as(
            r#"
            INSERT INTO reviews (place_id, user_name, rating, comment, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(place_id)
        .bind(&new.user_name)
        .bind(new.rating)
        .bind(&new.comment)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
    }
}
