//! Photo and Like database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for photos table
#[derive(Debug, Clone, FromRow)]
pub struct PhotoModel {
    pub id: i64,
    pub user_id: i64,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for likes table ((photo_id, user_id) is the primary key)
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub photo_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
