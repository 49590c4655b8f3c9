//! Connection database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for connections table
///
/// `status` holds "pending", "accepted" or "rejected". The table carries a
/// unique index on (LEAST(requester_id, receiver_id), GREATEST(...)), so a
/// pair has at most one edge regardless of direction.
#[derive(Debug, Clone, FromRow)]
pub struct ConnectionModel {
    pub id: i64,
    pub requester_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConnectionModel {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}
