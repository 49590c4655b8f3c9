//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use connect_core::{RelationshipStatus, Year};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Acknowledgement that a sign-in code was sent
#[derive(Debug, Serialize)]
pub struct OtpRequestedResponse {
    pub email: String,
    /// Seconds until the code expires
    pub expires_in: i64,
}

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (no email)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub onboarded: bool,
    pub created_at: DateTime<Utc>,
}

/// Discovery feed entry: a profile plus how it relates to the viewer
#[derive(Debug, Serialize)]
pub struct DiscoverUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub relationship: RelationshipStatus,
}

// ============================================================================
// Connection Responses
// ============================================================================

/// Connection edge response
#[derive(Debug, Serialize)]
pub struct ConnectionResponse {
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Connection edge with the counterpart's profile attached
#[derive(Debug, Serialize)]
pub struct ConnectionWithUserResponse {
    #[serde(flatten)]
    pub connection: ConnectionResponse,
    pub user: UserResponse,
}

/// Relationship status between the viewer and one subject
#[derive(Debug, Serialize)]
pub struct RelationshipResponse {
    pub user_id: String,
    pub relationship: RelationshipStatus,
}

// ============================================================================
// Chat Responses
// ============================================================================

/// Direct message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub is_read: bool,
    /// Present when the content encodes a shared post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_post: Option<SharedPostResponse>,
    pub created_at: DateTime<Utc>,
}

/// Decoded shared-post payload
#[derive(Debug, Clone, Serialize)]
pub struct SharedPostResponse {
    pub post_id: String,
    pub post_url: String,
    pub username: String,
    pub caption: String,
    pub image_url: String,
}

/// One entry in the conversation list
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub user: UserResponse,
    pub last_message: MessageResponse,
    pub unread_count: i64,
}

/// Total unread message count for the navigation badge
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// Result of marking a thread read
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub marked: u64,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// Feed item: a post joined with author and engagement counts
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: String,
    pub author: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// Like count after a like/unlike
#[derive(Debug, Serialize)]
pub struct LikeCountResponse {
    pub photo_id: String,
    pub like_count: i64,
    pub liked_by_me: bool,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Single comment with its author
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub photo_id: String,
    pub user: UserResponse,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Root comment with its flat list of replies
#[derive(Debug, Serialize)]
pub struct CommentThreadResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub replies: Vec<CommentResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(true, false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.redis, "unhealthy");
    }
}
