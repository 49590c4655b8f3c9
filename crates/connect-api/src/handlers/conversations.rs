//! Conversation handlers
//!
//! Direct-message threads, the aggregated inbox, and read tracking.
//! Clients poll these endpoints on an interval rather than holding a
//! persistent connection.

use axum::{
    Json,
    extract::{Path, State},
};
use connect_service::{
    ChatService, ConversationResponse, MarkReadResponse, MessageResponse, SendMessageRequest,
    SharePostRequest, UnreadCountResponse,
};
use tracing::instrument;

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the authenticated user's conversations, most recent first
///
/// GET /api/v1/conversations
#[instrument(skip(state))]
pub async fn list_conversations(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<ConversationResponse>>> {
    let service = ChatService::new(state.service_context());
    let response = service.conversations(auth_user.user_id).await?;
    Ok(Json(response))
}

/// Total unread count across all conversations
///
/// GET /api/v1/conversations/unread-count
#[instrument(skip(state))]
pub async fn unread_count(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = ChatService::new(state.service_context());
    let response = service.unread_count(auth_user.user_id).await?;
    Ok(Json(response))
}

/// Full message history with one counterpart, oldest first
///
/// GET /api/v1/conversations/:user_id
#[instrument(skip(state))]
pub async fn get_thread(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let counterpart_id = path.user_id()?;
    let service = ChatService::new(state.service_context());
    let response = service.thread(auth_user.user_id, counterpart_id).await?;
    Ok(Json(response))
}

/// Send a direct message to a counterpart
///
/// POST /api/v1/conversations/:user_id
#[instrument(skip(state, request))]
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let receiver_id = path.user_id()?;
    let service = ChatService::new(state.service_context());
    let response = service
        .send(auth_user.user_id, receiver_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Share a post into a direct-message thread
///
/// POST /api/v1/conversations/:user_id/share
#[instrument(skip(state, request))]
pub async fn share_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<SharePostRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let receiver_id = path.user_id()?;
    let service = ChatService::new(state.service_context());
    let response = service
        .share_post(auth_user.user_id, receiver_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Mark every message from a counterpart as read
///
/// POST /api/v1/conversations/:user_id/read
#[instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<MarkReadResponse>> {
    let counterpart_id = path.user_id()?;
    let service = ChatService::new(state.service_context());
    let response = service.mark_read(auth_user.user_id, counterpart_id).await?;
    Ok(Json(response))
}
