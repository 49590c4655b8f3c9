//! Photo feed handlers
//!
//! Post creation, the reverse-chronological feed, and likes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use connect_service::{
    CreatePhotoRequest, FeedRequest, FeedService, LikeCountResponse, PhotoResponse,
};
use tracing::instrument;

use crate::extractors::{AuthUser, PhotoIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post with an image, a caption, or both
///
/// POST /api/v1/photos
#[instrument(skip(state, request))]
pub async fn create_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePhotoRequest>,
) -> ApiResult<Created<Json<PhotoResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.create(auth_user.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// The global feed, newest first, with cursor pagination
///
/// GET /api/v1/photos
#[instrument(skip(state))]
pub async fn get_feed(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(request): Query<FeedRequest>,
) -> ApiResult<Json<Vec<PhotoResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.feed(auth_user.user_id, request).await?;
    Ok(Json(response))
}

/// Fetch a single post
///
/// GET /api/v1/photos/:photo_id
#[instrument(skip(state))]
pub async fn get_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
) -> ApiResult<Json<PhotoResponse>> {
    let photo_id = path.photo_id()?;
    let service = FeedService::new(state.service_context());
    let response = service.get(auth_user.user_id, photo_id).await?;
    Ok(Json(response))
}

/// Delete a post the authenticated user owns
///
/// DELETE /api/v1/photos/:photo_id
#[instrument(skip(state))]
pub async fn delete_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
) -> ApiResult<NoContent> {
    let photo_id = path.photo_id()?;
    let service = FeedService::new(state.service_context());
    service.delete(auth_user.user_id, photo_id).await?;
    Ok(NoContent)
}

/// Like a post
///
/// PUT /api/v1/photos/:photo_id/like
#[instrument(skip(state))]
pub async fn like_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
) -> ApiResult<Json<LikeCountResponse>> {
    let photo_id = path.photo_id()?;
    let service = FeedService::new(state.service_context());
    let response = service.like(auth_user.user_id, photo_id).await?;
    Ok(Json(response))
}

/// Remove a like from a post
///
/// DELETE /api/v1/photos/:photo_id/like
#[instrument(skip(state))]
pub async fn unlike_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<PhotoIdPath>,
) -> ApiResult<Json<LikeCountResponse>> {
    let photo_id = path.photo_id()?;
    let service = FeedService::new(state.service_context());
    let response = service.unlike(auth_user.user_id, photo_id).await?;
    Ok(Json(response))
}
