//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found: @{0}")]
    UsernameNotFound(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PhotoNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid year of study")]
    InvalidYear,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Post must have an image or a caption")]
    EmptyPost,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the post owner")]
    NotPhotoOwner,

    #[error("Not the comment author")]
    NotCommentAuthor,

    #[error("Not a participant of this connection")]
    NotConnectionParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Connection already exists between this pair")]
    ConnectionAlreadyExists,

    #[error("Post already liked")]
    AlreadyLiked,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot send a connection request to yourself")]
    SelfConnection,

    #[error("Cannot message yourself")]
    SelfMessage,

    #[error("Connection request already resolved")]
    ConnectionResolved,

    #[error("Onboarding not completed")]
    NotOnboarded,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UsernameNotFound(_) => "UNKNOWN_USER",
            Self::ConnectionNotFound(_) => "UNKNOWN_CONNECTION",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::PhotoNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::InvalidYear => "INVALID_YEAR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::EmptyPost => "EMPTY_POST",

            // Authorization
            Self::NotPhotoOwner => "NOT_POST_OWNER",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotConnectionParticipant => "NOT_CONNECTION_PARTICIPANT",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::ConnectionAlreadyExists => "CONNECTION_ALREADY_EXISTS",
            Self::AlreadyLiked => "ALREADY_LIKED",

            // Business Rules
            Self::SelfConnection => "SELF_CONNECTION",
            Self::SelfMessage => "SELF_MESSAGE",
            Self::ConnectionResolved => "CONNECTION_RESOLVED",
            Self::NotOnboarded => "NOT_ONBOARDED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UsernameNotFound(_)
                | Self::ConnectionNotFound(_)
                | Self::MessageNotFound(_)
                | Self::PhotoNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::InvalidYear
                | Self::ContentTooLong { .. }
                | Self::EmptyPost
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotPhotoOwner | Self::NotCommentAuthor | Self::NotConnectionParticipant
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::ConnectionAlreadyExists
                | Self::AlreadyLiked
        )
    }
}
