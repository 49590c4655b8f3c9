//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub. Toast
//! notification listeners subscribe to their own user channel.

use connect_core::Snowflake;

/// Channel prefix for user-specific events
pub const USER_CHANNEL_PREFIX: &str = "user:";
/// Channel for broadcast events (all connected clients)
pub const BROADCAST_CHANNEL: &str = "broadcast";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for a specific user (all their sessions)
    User(Snowflake),
    /// Broadcast to all connected clients
    Broadcast,
}

impl PubSubChannel {
    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Broadcast => BROADCAST_CHANNEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        let user_id = Snowflake::from(11111i64);

        assert_eq!(PubSubChannel::User(user_id).name(), "user:11111");
        assert_eq!(PubSubChannel::Broadcast.name(), "broadcast");
    }
}
