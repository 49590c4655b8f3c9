//! # connect-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CommentResponse, CommentThreadResponse, ConnectionResponse,
    ConnectionWithUserResponse, ConversationResponse, CreateCommentRequest,
    CreateConnectionRequest, CreatePhotoRequest, CurrentUserResponse, DiscoverRequest,
    DiscoverUserResponse, FeedRequest, HealthResponse, LikeCountResponse, LogoutRequest,
    MarkReadResponse, MessageResponse, OnboardingRequest, OtpRequestedResponse, PhotoResponse,
    ReadinessResponse, RefreshTokenRequest, RelationshipResponse, RequestOtpRequest,
    SendMessageRequest, SharePostRequest, UnreadCountResponse, UpdateProfileRequest,
    UserResponse, VerifyOtpRequest,
};
pub use services::{
    AuthService, ChatService, CommentService, ConnectionService, FeedService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
