//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a unique email address
pub fn unique_email() -> String {
    format!("student{}@campus.example.com", unique_suffix())
}

/// OTP request
#[derive(Debug, Serialize)]
pub struct RequestOtpRequest {
    pub email: String,
}

/// OTP verification request
#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Serialize)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user response (includes email)
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub image_url: Option<String>,
    pub onboarded: bool,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Onboarding request
#[derive(Debug, Serialize)]
pub struct OnboardingRequest {
    pub username: String,
    pub name: String,
    pub college: String,
    pub branch: String,
    pub year: String,
}

impl OnboardingRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("student{suffix}"),
            name: format!("Student {suffix}"),
            college: "Test Institute of Technology".to_string(),
            branch: "Computer Science".to_string(),
            year: "2nd".to_string(),
        }
    }
}

/// Profile update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Connection request
#[derive(Debug, Serialize)]
pub struct CreateConnectionRequest {
    pub user_id: String,
}

/// Connection response
#[derive(Debug, Deserialize)]
pub struct ConnectionResponse {
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Relationship response
#[derive(Debug, Deserialize)]
pub struct RelationshipResponse {
    pub user_id: String,
    pub relationship: String,
}

/// Send message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Share post request
#[derive(Debug, Serialize)]
pub struct SharePostRequest {
    pub photo_id: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub is_read: bool,
    pub shared_post: Option<SharedPostResponse>,
    pub created_at: String,
}

/// Decoded shared-post payload
#[derive(Debug, Deserialize)]
pub struct SharedPostResponse {
    pub post_id: String,
    pub post_url: String,
    pub username: String,
    pub caption: String,
    pub image_url: String,
}

/// Conversation list entry
#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub user: UserResponse,
    pub last_message: MessageResponse,
    pub unread_count: i64,
}

/// Total unread count
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// Mark-read result
#[derive(Debug, Deserialize)]
pub struct MarkReadResponse {
    pub marked: u64,
}

/// Create photo request
#[derive(Debug, Serialize)]
pub struct CreatePhotoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl CreatePhotoRequest {
    pub fn with_caption(caption: &str) -> Self {
        Self {
            image_url: None,
            caption: Some(caption.to_string()),
        }
    }

    pub fn with_image() -> Self {
        let suffix = unique_suffix();
        Self {
            image_url: Some(format!("https://cdn.example.com/photo{suffix}.jpg")),
            caption: Some(format!("Test photo {suffix}")),
        }
    }
}

/// Photo response
#[derive(Debug, Deserialize)]
pub struct PhotoResponse {
    pub id: String,
    pub author: UserResponse,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_me: bool,
    pub created_at: String,
}

/// Like count response
#[derive(Debug, Deserialize)]
pub struct LikeCountResponse {
    pub photo_id: String,
    pub like_count: i64,
    pub liked_by_me: bool,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn root(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: None,
        }
    }

    pub fn reply(content: &str, parent_id: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: Some(parent_id.to_string()),
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub photo_id: String,
    pub user: UserResponse,
    pub content: String,
    pub parent_id: Option<String>,
    pub created_at: String,
}

/// Root comment with replies
#[derive(Debug, Deserialize)]
pub struct CommentThreadResponse {
    pub id: String,
    pub photo_id: String,
    pub user: UserResponse,
    pub content: String,
    pub created_at: String,
    pub replies: Vec<CommentResponse>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
