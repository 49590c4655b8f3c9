//! Connection handlers
//!
//! Connection requests, accept/reject resolution, and relationship lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use connect_service::{
    ConnectionResponse, ConnectionService, ConnectionWithUserResponse, CreateConnectionRequest,
    RelationshipResponse,
};
use tracing::instrument;

use crate::extractors::{AuthUser, ConnectionIdPath, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a connection request to another user
///
/// POST /api/v1/connections
#[instrument(skip(state, request))]
pub async fn request_connection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateConnectionRequest>,
) -> ApiResult<Created<Json<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.request(auth_user.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List all connection edges touching the authenticated user
///
/// GET /api/v1/connections
#[instrument(skip(state))]
pub async fn list_connections(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<ConnectionWithUserResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.list(auth_user.user_id).await?;
    Ok(Json(response))
}

/// Accept a pending request addressed to the authenticated user
///
/// POST /api/v1/connections/:connection_id/accept
#[instrument(skip(state))]
pub async fn accept_connection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<ConnectionIdPath>,
) -> ApiResult<Json<ConnectionResponse>> {
    let connection_id = path.connection_id()?;
    let service = ConnectionService::new(state.service_context());
    let response = service.accept(auth_user.user_id, connection_id).await?;
    Ok(Json(response))
}

/// Reject a pending request addressed to the authenticated user
///
/// POST /api/v1/connections/:connection_id/reject
#[instrument(skip(state))]
pub async fn reject_connection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<ConnectionIdPath>,
) -> ApiResult<Json<ConnectionResponse>> {
    let connection_id = path.connection_id()?;
    let service = ConnectionService::new(state.service_context());
    let response = service.reject(auth_user.user_id, connection_id).await?;
    Ok(Json(response))
}

/// Resolve the relationship between the viewer and another user
///
/// GET /api/v1/connections/status/:user_id
#[instrument(skip(state))]
pub async fn connection_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<RelationshipResponse>> {
    let subject_id = path.user_id()?;
    let service = ConnectionService::new(state.service_context());
    let response = service.status(auth_user.user_id, subject_id).await?;
    Ok(Json(response))
}
