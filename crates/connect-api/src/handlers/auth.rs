//! Authentication handlers
//!
//! Email OTP sign-in, token refresh, and logout.

use axum::{Json, extract::State};
use connect_service::{
    AuthResponse, AuthService, LogoutRequest, OtpRequestedResponse, RefreshTokenRequest,
    RequestOtpRequest, VerifyOtpRequest,
};
use tracing::instrument;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Request a one-time sign-in code by email
///
/// POST /api/v1/auth/otp/request
#[instrument(skip(state, request))]
pub async fn request_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RequestOtpRequest>,
) -> ApiResult<Json<OtpRequestedResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.request_otp(request).await?;
    Ok(Json(response))
}

/// Verify a one-time code and receive a token pair
///
/// Creates the account on first successful verification.
///
/// POST /api/v1/auth/otp/verify
#[instrument(skip(state, request))]
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify_otp(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new token pair
///
/// POST /api/v1/auth/refresh
#[instrument(skip(state, request))]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Revoke the current session's refresh token
///
/// POST /api/v1/auth/logout
#[instrument(skip(state, request))]
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<LogoutRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(auth_user.user_id, request).await?;
    Ok(NoContent)
}
