//! PostgreSQL implementation of PhotoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use connect_core::entities::Photo;
use connect_core::traits::{PhotoQuery, PhotoRepository, RepoResult};
use connect_core::value_objects::Snowflake;

use crate::models::PhotoModel;

use super::error::{map_db_error, photo_not_found};

const PHOTO_COLUMNS: &str = "id, user_id, image_url, caption, created_at";

/// PostgreSQL implementation of PhotoRepository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Photo>> {
        let result = sqlx::query_as::<_, PhotoModel>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Photo::from))
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, query: &PhotoQuery) -> RepoResult<Vec<Photo>> {
        let limit = query.limit.clamp(1, 100);

        let results = match query.before {
            Some(before) => {
                // Keyset page (scrolling down the feed)
                sqlx::query_as::<_, PhotoModel>(&format!(
                    r"
                    SELECT {PHOTO_COLUMNS} FROM photos
                    WHERE id < $1
                    ORDER BY id DESC
                    LIMIT $2
                    "
                ))
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PhotoModel>(&format!(
                    r"
                    SELECT {PHOTO_COLUMNS} FROM photos
                    ORDER BY id DESC
                    LIMIT $1
                    "
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Photo>> {
        let results = sqlx::query_as::<_, PhotoModel>(&format!(
            r"
            SELECT {PHOTO_COLUMNS} FROM photos
            WHERE user_id = $1
            ORDER BY id DESC
            "
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, photo: &Photo) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO photos (id, user_id, image_url, caption, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(photo.id.into_inner())
        .bind(photo.user_id.into_inner())
        .bind(&photo.image_url)
        .bind(&photo.caption)
        .bind(photo.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Likes and comments cascade via foreign keys
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(photo_not_found(id));
        }

        Ok(())
    }
}
