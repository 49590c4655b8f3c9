//! Conversation aggregation - per-counterpart rollup of a message history

use crate::entities::Message;
use crate::value_objects::Snowflake;

/// Aggregated view of all messages with one counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub counterpart_id: Snowflake,
    pub last_message: Message,
    pub unread_count: i64,
}

/// Group a user's message history into one conversation per counterpart.
///
/// Single pass over the list. The most recent message per counterpart
/// becomes `last_message`; unread tallies count messages where the user is
/// the receiver and `is_read` is false. Output is sorted descending by
/// last-message time. Input order does not matter.
pub fn aggregate_conversations(user_id: Snowflake, messages: &[Message]) -> Vec<Conversation> {
    let mut conversations: Vec<Conversation> = Vec::new();

    for msg in messages {
        let counterpart = msg.counterpart(user_id);
        let unread = i64::from(msg.is_unread_by(user_id));

        match conversations
            .iter_mut()
            .find(|c| c.counterpart_id == counterpart)
        {
            Some(conv) => {
                conv.unread_count += unread;
                if msg.created_at > conv.last_message.created_at {
                    conv.last_message = msg.clone();
                }
            }
            None => conversations.push(Conversation {
                counterpart_id: counterpart,
                last_message: msg.clone(),
                unread_count: unread,
            }),
        }
    }

    conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
    conversations
}
