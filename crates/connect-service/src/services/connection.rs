//! Connection service
//!
//! Manages the directed request graph between user pairs. A pair has at most
//! one edge, enforced by a canonical-ordering unique index; pending edges
//! resolve to accepted or rejected, both terminal.

use connect_cache::{PubSubChannel, PubSubEvent};
use connect_core::entities::Connection;
use connect_core::{ConnectionStatus, DomainError, Snowflake, resolve_relationship};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::{
    ConnectionResponse, ConnectionWithUserResponse, CreateConnectionRequest, RelationshipResponse,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Connection service
pub struct ConnectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConnectionService<'a> {
    /// Create a new ConnectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a connection request to another user
    #[instrument(skip(self, request))]
    pub async fn request(
        &self,
        requester_id: Snowflake,
        request: CreateConnectionRequest,
    ) -> ServiceResult<ConnectionResponse> {
        let receiver_id = parse_snowflake(&request.user_id)?;

        if receiver_id == requester_id {
            return Err(DomainError::SelfConnection.into());
        }

        self.ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(receiver_id))?;

        // Either direction counts; the unique index backs this up
        if self
            .ctx
            .connection_repo()
            .find_between(requester_id, receiver_id)
            .await?
            .is_some()
        {
            return Err(DomainError::ConnectionAlreadyExists.into());
        }

        let connection = Connection::new(self.ctx.generate_id(), requester_id, receiver_id);
        self.ctx.connection_repo().create(&connection).await?;

        info!(
            connection_id = %connection.id,
            requester_id = %requester_id,
            receiver_id = %receiver_id,
            "Connection request created"
        );

        self.notify(
            receiver_id,
            "CONNECTION_REQUEST",
            json!({
                "connection_id": connection.id.to_string(),
                "requester_id": requester_id.to_string(),
            }),
        )
        .await;

        Ok(ConnectionResponse::from(&connection))
    }

    /// Accept a pending request addressed to the user
    #[instrument(skip(self))]
    pub async fn accept(
        &self,
        user_id: Snowflake,
        connection_id: Snowflake,
    ) -> ServiceResult<ConnectionResponse> {
        self.resolve(user_id, connection_id, ConnectionStatus::Accepted)
            .await
    }

    /// Reject a pending request addressed to the user
    #[instrument(skip(self))]
    pub async fn reject(
        &self,
        user_id: Snowflake,
        connection_id: Snowflake,
    ) -> ServiceResult<ConnectionResponse> {
        self.resolve(user_id, connection_id, ConnectionStatus::Rejected)
            .await
    }

    /// List all edges touching the user, with the counterpart's profile
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<Vec<ConnectionWithUserResponse>> {
        let connections = self.ctx.connection_repo().find_by_user(user_id).await?;
        if connections.is_empty() {
            return Ok(Vec::new());
        }

        let counterpart_ids: Vec<Snowflake> =
            connections.iter().map(|c| c.counterpart(user_id)).collect();
        let users = self.ctx.user_repo().find_by_ids(&counterpart_ids).await?;

        Ok(connections
            .iter()
            .filter_map(|c| {
                let counterpart_id = c.counterpart(user_id);
                let Some(user) = users.iter().find(|u| u.id == counterpart_id) else {
                    warn!(connection_id = %c.id, counterpart_id = %counterpart_id, "Counterpart profile missing");
                    return None;
                };
                Some(ConnectionWithUserResponse {
                    connection: ConnectionResponse::from(c),
                    user: UserResponse::from(user),
                })
            })
            .collect())
    }

    /// Relationship status between the viewer and one subject
    ///
    /// Accepted and rejected read the same from both sides; pending is
    /// directional.
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        viewer_id: Snowflake,
        subject_id: Snowflake,
    ) -> ServiceResult<RelationshipResponse> {
        let connections = self.ctx.connection_repo().find_by_user(viewer_id).await?;

        Ok(RelationshipResponse {
            user_id: subject_id.to_string(),
            relationship: resolve_relationship(viewer_id, subject_id, &connections),
        })
    }

    /// Move a pending edge to a terminal status; only the receiver may act
    async fn resolve(
        &self,
        user_id: Snowflake,
        connection_id: Snowflake,
        status: ConnectionStatus,
    ) -> ServiceResult<ConnectionResponse> {
        let mut connection = self
            .ctx
            .connection_repo()
            .find_by_id(connection_id)
            .await?
            .ok_or(DomainError::ConnectionNotFound(connection_id))?;

        if connection.receiver_id != user_id {
            return Err(DomainError::NotConnectionParticipant.into());
        }
        if connection.status.is_terminal() {
            return Err(DomainError::ConnectionResolved.into());
        }

        self.ctx
            .connection_repo()
            .set_status(connection_id, status)
            .await?;
        connection.status = status;

        info!(
            connection_id = %connection_id,
            status = %status.as_str(),
            "Connection request resolved"
        );

        let event_type = match status {
            ConnectionStatus::Accepted => "CONNECTION_ACCEPTED",
            _ => "CONNECTION_REJECTED",
        };
        self.notify(
            connection.requester_id,
            event_type,
            json!({
                "connection_id": connection_id.to_string(),
                "receiver_id": user_id.to_string(),
            }),
        )
        .await;

        Ok(ConnectionResponse::from(&connection))
    }

    /// Best-effort toast notification; a publish failure never fails the write
    async fn notify(&self, user_id: Snowflake, event_type: &str, data: serde_json::Value) {
        let event = PubSubEvent::new(event_type, data);
        if let Err(e) = self
            .ctx
            .publisher()
            .publish(&PubSubChannel::User(user_id), &event)
            .await
        {
            warn!(user_id = %user_id, error = %e, "Failed to publish connection event");
        }
    }
}

/// Parse a Snowflake from its string form in a request body
fn parse_snowflake(raw: &str) -> ServiceResult<Snowflake> {
    raw.parse::<Snowflake>()
        .map_err(|_| ServiceError::validation(format!("invalid id: {raw}")))
}
