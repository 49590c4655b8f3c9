//! User profile handlers
//!
//! Current-user profile, onboarding, discovery, and public profiles.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use connect_service::{
    CurrentUserResponse, DiscoverRequest, DiscoverUserResponse, FeedService, OnboardingRequest,
    PhotoResponse, UpdateProfileRequest, UserService,
};
use tracing::instrument;

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's own profile
///
/// GET /api/v1/users/@me
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(auth_user.user_id).await?;
    Ok(Json(response))
}

/// Complete the onboarding profile after first sign-in
///
/// POST /api/v1/users/@me/onboarding
#[instrument(skip(state, request))]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(request): ValidatedJson<OnboardingRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.complete_onboarding(auth_user.user_id, request).await?;
    Ok(Json(response))
}

/// Update profile fields (partial update)
///
/// PATCH /api/v1/users/@me
#[instrument(skip(state, request))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth_user.user_id, request).await?;
    Ok(Json(response))
}

/// Browse other students, filtered by search text, college, branch, or year
///
/// GET /api/v1/users/discover
#[instrument(skip(state))]
pub async fn discover(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(request): Query<DiscoverRequest>,
) -> ApiResult<Json<Vec<DiscoverUserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.discover(auth_user.user_id, request).await?;
    Ok(Json(response))
}

/// Get another user's public profile with the relationship to the viewer
///
/// GET /api/v1/users/:user_id
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<DiscoverUserResponse>> {
    let subject_id = path.user_id()?;
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth_user.user_id, subject_id).await?;
    Ok(Json(response))
}

/// List a user's posts, newest first
///
/// GET /api/v1/users/:user_id/photos
#[instrument(skip(state))]
pub async fn get_user_photos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<PhotoResponse>>> {
    let user_id = path.user_id()?;
    let service = FeedService::new(state.service_context());
    let response = service.user_photos(auth_user.user_id, user_id).await?;
    Ok(Json(response))
}
