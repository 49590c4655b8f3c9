//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use connect_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with connection_id
#[derive(Debug, serde::Deserialize)]
pub struct ConnectionIdPath {
    pub connection_id: String,
}

impl ConnectionIdPath {
    /// Parse connection_id as Snowflake
    pub fn connection_id(&self) -> Result<Snowflake, ApiError> {
        self.connection_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid connection_id format"))
    }
}

/// Path parameters with photo_id
#[derive(Debug, serde::Deserialize)]
pub struct PhotoIdPath {
    pub photo_id: String,
}

impl PhotoIdPath {
    /// Parse photo_id as Snowflake
    pub fn photo_id(&self) -> Result<Snowflake, ApiError> {
        self.photo_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid photo_id format"))
    }
}

/// Path parameters with comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}
