//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::handlers::{auth, comments, connections, conversations, health, photos, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(connection_routes())
        .merge(conversation_routes())
        .merge(photo_routes())
        .merge(comment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/otp/request", post(auth::request_otp))
        .route("/auth/otp/verify", post(auth::verify_otp))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_me))
        .route("/users/@me", patch(users::update_profile))
        .route("/users/@me/onboarding", post(users::complete_onboarding))
        .route("/users/discover", get(users::discover))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/photos", get(users::get_user_photos))
}

/// Connection routes
fn connection_routes() -> Router<AppState> {
    Router::new()
        .route("/connections", get(connections::list_connections))
        .route("/connections", post(connections::request_connection))
        .route(
            "/connections/:connection_id/accept",
            post(connections::accept_connection),
        )
        .route(
            "/connections/:connection_id/reject",
            post(connections::reject_connection),
        )
        .route(
            "/connections/status/:user_id",
            get(connections::connection_status),
        )
}

/// Conversation routes
fn conversation_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(conversations::list_conversations))
        .route(
            "/conversations/unread-count",
            get(conversations::unread_count),
        )
        .route("/conversations/:user_id", get(conversations::get_thread))
        .route("/conversations/:user_id", post(conversations::send_message))
        .route(
            "/conversations/:user_id/share",
            post(conversations::share_post),
        )
        .route("/conversations/:user_id/read", post(conversations::mark_read))
}

/// Photo feed routes
fn photo_routes() -> Router<AppState> {
    Router::new()
        .route("/photos", get(photos::get_feed))
        .route("/photos", post(photos::create_photo))
        .route("/photos/:photo_id", get(photos::get_photo))
        .route("/photos/:photo_id", delete(photos::delete_photo))
        .route("/photos/:photo_id/like", put(photos::like_photo))
        .route("/photos/:photo_id/like", delete(photos::unlike_photo))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/photos/:photo_id/comments", get(comments::list_comments))
        .route("/photos/:photo_id/comments", post(comments::create_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}
