//! Message entity <-> model mapper

use connect_core::entities::Message;
use connect_core::value_objects::Snowflake;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            receiver_id: Snowflake::new(model.receiver_id),
            content: model.content,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
