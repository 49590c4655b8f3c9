//! Connection entity <-> model mapper

use connect_core::entities::{Connection, ConnectionStatus};
use connect_core::value_objects::Snowflake;

use crate::models::ConnectionModel;

/// Column text for a status
pub fn connection_status_to_str(status: ConnectionStatus) -> &'static str {
    status.as_str()
}

/// Parse a status column; unknown text falls back to rejected, which is
/// terminal and safe
pub fn connection_status_from_str(s: &str) -> ConnectionStatus {
    match s {
        "pending" => ConnectionStatus::Pending,
        "accepted" => ConnectionStatus::Accepted,
        _ => ConnectionStatus::Rejected,
    }
}

/// Convert ConnectionModel to Connection entity
impl From<ConnectionModel> for Connection {
    fn from(model: ConnectionModel) -> Self {
        Connection {
            id: Snowflake::new(model.id),
            requester_id: Snowflake::new(model.requester_id),
            receiver_id: Snowflake::new(model.receiver_id),
            status: connection_status_from_str(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ConnectionStatus::Pending,
            ConnectionStatus::Accepted,
            ConnectionStatus::Rejected,
        ] {
            assert_eq!(
                connection_status_from_str(connection_status_to_str(status)),
                status
            );
        }
    }
}
