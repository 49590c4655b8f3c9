//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use connect_core::Year;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Request a one-time sign-in code by email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Submit a one-time code for verification
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Onboarding completion request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OnboardingRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "College must be 1-100 characters"))]
    pub college: String,

    #[validate(length(min = 1, max = 100, message = "Branch must be 1-100 characters"))]
    pub branch: String,

    pub year: Year,
}

/// Update current user profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    pub interests: Option<Vec<String>>,

    /// Profile image URL or null to remove
    pub image_url: Option<String>,
}

/// Discovery/search query
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DiscoverRequest {
    /// Case-insensitive substring match on name or username
    pub q: Option<String>,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<Year>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ============================================================================
// Connection Requests
// ============================================================================

/// Send a connection request to another user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConnectionRequest {
    /// Target user ID (Snowflake as string)
    pub user_id: String,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Send a direct message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

/// Share a post into a direct message thread
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SharePostRequest {
    /// Post ID (Snowflake as string)
    pub photo_id: String,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Create a post (image and/or caption; at least one must be present)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePhotoRequest {
    pub image_url: Option<String>,

    #[validate(length(max = 2000, message = "Caption must be at most 2000 characters"))]
    pub caption: Option<String>,
}

/// Keyset pagination for the feed
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeedRequest {
    /// Return posts with an id strictly below this one (Snowflake as string)
    pub before: Option<String>,
    pub limit: Option<i64>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create a comment on a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,

    /// Parent comment ID for replies (Snowflake as string)
    pub parent_id: Option<String>,
}
