//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use connect_core::entities::Like;
use connect_core::error::DomainError;
use connect_core::traits::{LikeRepository, RepoResult};
use connect_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, photo_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE photo_id = $1 AND user_id = $2)",
        )
        .bind(photo_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_for_photo(&self, photo_id: Snowflake) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE photo_id = $1")
                .bind(photo_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn liked_of(
        &self,
        user_id: Snowflake,
        photo_ids: &[Snowflake],
    ) -> RepoResult<Vec<Snowflake>> {
        if photo_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = photo_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_scalar::<_, i64>(
            "SELECT photo_id FROM likes WHERE user_id = $1 AND photo_id = ANY($2)",
        )
        .bind(user_id.into_inner())
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO likes (photo_id, user_id, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(like.photo_id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyLiked))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, photo_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM likes WHERE photo_id = $1 AND user_id = $2")
            .bind(photo_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
