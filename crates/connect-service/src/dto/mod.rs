//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreateConnectionRequest, CreatePhotoRequest, DiscoverRequest,
    FeedRequest, LogoutRequest, OnboardingRequest, RefreshTokenRequest, RequestOtpRequest,
    SendMessageRequest, SharePostRequest, UpdateProfileRequest, VerifyOtpRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CommentResponse, CommentThreadResponse, ConnectionResponse,
    ConnectionWithUserResponse, ConversationResponse, CurrentUserResponse, DiscoverUserResponse,
    HealthChecks, HealthResponse, LikeCountResponse, MarkReadResponse, MessageResponse,
    OtpRequestedResponse, PhotoResponse, ReadinessResponse, RelationshipResponse,
    SharedPostResponse, UnreadCountResponse, UserResponse,
};

// Re-export mapper helpers
pub use mappers::comment_response;
