//! Message entity - a direct message between two users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Direct message from sender to receiver
///
/// `is_read` is flipped by the receiver when they open the thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread Message
    pub fn new(id: Snowflake, sender_id: Snowflake, receiver_id: Snowflake, content: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// The other user in the exchange, relative to `user_id`
    pub fn counterpart(&self, user_id: Snowflake) -> Snowflake {
        if self.sender_id == user_id {
            self.receiver_id
        } else {
            self.sender_id
        }
    }

    /// Whether this message is unread by the given user
    #[inline]
    pub fn is_unread_by(&self, user_id: Snowflake) -> bool {
        self.receiver_id == user_id && !self.is_read
    }

    /// Decode the shared-post payload, if present
    pub fn shared_post(&self) -> Option<SharedPost> {
        SharedPost::decode(&self.content)
    }
}

/// Structured "shared post" payload carried inside message content
///
/// Wire format: `SHARED_POST::<post_id>::<post_url>::<username>::<caption>::<image_url>`.
/// Fields themselves must not contain `::`; captions are sanitized on encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPost {
    pub post_id: Snowflake,
    pub post_url: String,
    pub username: String,
    pub caption: String,
    pub image_url: String,
}

impl SharedPost {
    pub const PREFIX: &'static str = "SHARED_POST";

    /// Encode into the delimited message-content format
    pub fn encode(&self) -> String {
        format!(
            "{}::{}::{}::{}::{}::{}",
            Self::PREFIX,
            self.post_id,
            self.post_url,
            self.username,
            self.caption.replace("::", " "),
            self.image_url,
        )
    }

    /// Decode from message content; returns None if the payload is malformed
    pub fn decode(content: &str) -> Option<Self> {
        let mut parts = content.splitn(6, "::");
        if parts.next()? != Self::PREFIX {
            return None;
        }
        let post_id = Snowflake::parse(parts.next()?).ok()?;
        let post_url = parts.next()?.to_string();
        let username = parts.next()?.to_string();
        let caption = parts.next()?.to_string();
        let image_url = parts.next()?.to_string();
        Some(Self {
            post_id,
            post_url,
            username,
            caption,
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_unread_by_receiver_only() {
        let msg = Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "hello".to_string(),
        );
        assert!(msg.is_unread_by(Snowflake::new(20)));
        assert!(!msg.is_unread_by(Snowflake::new(10)));
    }

    #[test]
    fn test_message_counterpart() {
        let msg = Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "hello".to_string(),
        );
        assert_eq!(msg.counterpart(Snowflake::new(10)), Snowflake::new(20));
        assert_eq!(msg.counterpart(Snowflake::new(20)), Snowflake::new(10));
    }

    #[test]
    fn test_shared_post_roundtrip() {
        let post = SharedPost {
            post_id: Snowflake::new(42),
            post_url: "/post/42".to_string(),
            username: "meera".to_string(),
            caption: "sunset at the hostel".to_string(),
            image_url: "https://cdn.example.com/p/42.jpg".to_string(),
        };
        let encoded = post.encode();
        assert!(encoded.starts_with("SHARED_POST::42::"));

        let decoded = SharedPost::decode(&encoded).unwrap();
        assert_eq!(decoded, post);
    }

    #[test]
    fn test_shared_post_caption_delimiter_sanitized() {
        let post = SharedPost {
            post_id: Snowflake::new(7),
            post_url: "/post/7".to_string(),
            username: "dev".to_string(),
            caption: "before::after".to_string(),
            image_url: String::new(),
        };
        let decoded = SharedPost::decode(&post.encode()).unwrap();
        assert_eq!(decoded.caption, "before after");
    }

    #[test]
    fn test_shared_post_decode_rejects_plain_text() {
        assert!(SharedPost::decode("just a normal message").is_none());
        assert!(SharedPost::decode("SHARED_POST::not-an-id::x::y::z::w").is_none());
        assert!(SharedPost::decode("SHARED_POST::42").is_none());
    }

    #[test]
    fn test_message_shared_post_detection() {
        let plain = Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "see you at 5".to_string(),
        );
        assert!(plain.shared_post().is_none());

        let shared = Message::new(
            Snowflake::new(2),
            Snowflake::new(10),
            Snowflake::new(20),
            "SHARED_POST::9::/post/9::meera::look::https://cdn.example.com/9.jpg".to_string(),
        );
        assert_eq!(shared.shared_post().unwrap().post_id, Snowflake::new(9));
    }
}
