//! PostgreSQL implementation of ConnectionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use connect_core::entities::{Connection, ConnectionStatus};
use connect_core::error::DomainError;
use connect_core::traits::{ConnectionRepository, RepoResult};
use connect_core::value_objects::Snowflake;

use crate::mappers::connection_status_to_str;
use crate::models::ConnectionModel;

use super::error::{connection_not_found, map_db_error, map_unique_violation};

const CONNECTION_COLUMNS: &str =
    "id, requester_id, receiver_id, status, created_at, updated_at";

/// PostgreSQL implementation of ConnectionRepository
#[derive(Clone)]
pub struct PgConnectionRepository {
    pool: PgPool,
}

impl PgConnectionRepository {
    /// Create a new PgConnectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRepository for PgConnectionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Connection>> {
        let result = sqlx::query_as::<_, ConnectionModel>(&format!(
            "SELECT {CONNECTION_COLUMNS} FROM connections WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Connection::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Connection>> {
        let results = sqlx::query_as::<_, ConnectionModel>(&format!(
            r"
            SELECT {CONNECTION_COLUMNS} FROM connections
            WHERE requester_id = $1 OR receiver_id = $1
            ORDER BY updated_at DESC
            "
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Connection::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_between(&self, a: Snowflake, b: Snowflake) -> RepoResult<Option<Connection>> {
        let result = sqlx::query_as::<_, ConnectionModel>(&format!(
            r"
            SELECT {CONNECTION_COLUMNS} FROM connections
            WHERE (requester_id = $1 AND receiver_id = $2)
               OR (requester_id = $2 AND receiver_id = $1)
            "
        ))
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Connection::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, connection: &Connection) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO connections (id, requester_id, receiver_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(connection.id.into_inner())
        .bind(connection.requester_id.into_inner())
        .bind(connection.receiver_id.into_inner())
        .bind(connection_status_to_str(connection.status))
        .bind(connection.created_at)
        .bind(connection.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ConnectionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Snowflake, status: ConnectionStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE connections
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(connection_status_to_str(status))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(connection_not_found(id));
        }

        Ok(())
    }
}
