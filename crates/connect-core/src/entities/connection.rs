//! Connection entity - directed relationship request between two users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Status of a connection edge
///
/// Pending transitions to Accepted or Rejected; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Rejected => "rejected",
        }
    }

    /// Whether the status can no longer change
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConnectionStatus::Pending)
    }
}

/// Directed connection edge (requester -> receiver)
///
/// At most one edge exists per unordered user pair, enforced by a
/// canonical-ordering unique index at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: Snowflake,
    pub requester_id: Snowflake,
    pub receiver_id: Snowflake,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Create a new pending connection request
    pub fn new(id: Snowflake, requester_id: Snowflake, receiver_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            requester_id,
            receiver_id,
            status: ConnectionStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this edge links exactly the given pair, in either direction
    pub fn links(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.requester_id == a && self.receiver_id == b)
            || (self.requester_id == b && self.receiver_id == a)
    }

    /// The other user on the edge, relative to `user_id`
    pub fn counterpart(&self, user_id: Snowflake) -> Snowflake {
        if self.requester_id == user_id {
            self.receiver_id
        } else {
            self.requester_id
        }
    }

    /// Accept a pending request
    pub fn accept(&mut self) {
        self.status = ConnectionStatus::Accepted;
        self.updated_at = Utc::now();
    }

    /// Reject a pending request
    pub fn reject(&mut self) {
        self.status = ConnectionStatus::Rejected;
        self.updated_at = Utc::now();
    }
}

/// Connection state between a viewer and a subject, from the viewer's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    /// No edge exists between the pair
    None,
    /// Viewer sent a request that is still pending
    PendingSent,
    /// Subject sent a request the viewer has not acted on
    PendingReceived,
    /// The pair is connected
    Connected,
    /// A request between the pair was rejected
    Rejected,
}

/// Resolve the relationship between viewer and subject from the viewer's
/// connection list.
///
/// Linear scan for an edge matching the pair in either direction. Accepted
/// and Rejected resolve identically from both sides; Pending is directional.
pub fn resolve_relationship(
    viewer_id: Snowflake,
    subject_id: Snowflake,
    connections: &[Connection],
) -> RelationshipStatus {
    let Some(edge) = connections.iter().find(|c| c.links(viewer_id, subject_id)) else {
        return RelationshipStatus::None;
    };
    match edge.status {
        ConnectionStatus::Accepted => RelationshipStatus::Connected,
        ConnectionStatus::Rejected => RelationshipStatus::Rejected,
        ConnectionStatus::Pending if edge.requester_id == viewer_id => {
            RelationshipStatus::PendingSent
        }
        ConnectionStatus::Pending => RelationshipStatus::PendingReceived,
    }
}
