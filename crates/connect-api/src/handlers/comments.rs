//! Comment handlers
//!
//! Two-level comment threads on posts.

use axum::{
    Json,
    extract::{Path, State},
};
use connect_service::{
    CommentResponse, CommentService, CommentThreadResponse, CreateCommentRequest,
};
use tracing::instrument;

use crate::extractors::{AuthUser, CommentIdPath, PhotoIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a comment or a reply to a post
///
/// POST /api/v1/photos/:photo_id/comments
#[instrument(skip(state, request))]
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let photo_id = path.photo_id()?;
    let service = CommentService::new(state.service_context());
    let response = service
        .create(auth_user.user_id, photo_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List a post's comments as root threads with nested replies
///
/// GET /api/v1/photos/:photo_id/comments
#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
) -> ApiResult<Json<Vec<CommentThreadResponse>>> {
    let photo_id = path.photo_id()?;
    let service = CommentService::new(state.service_context());
    let response = service.list(photo_id).await?;
    Ok(Json(response))
}

/// Delete a comment the authenticated user wrote
///
/// DELETE /api/v1/comments/:comment_id
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;
    let service = CommentService::new(state.service_context());
    service.delete(auth_user.user_id, comment_id).await?;
    Ok(NoContent)
}
