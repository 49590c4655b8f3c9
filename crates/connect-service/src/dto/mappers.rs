//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Responses that join several entities (comments with authors, feed items)
//! are assembled in the service layer from these building blocks.

use connect_core::entities::{Comment, Connection, Message, SharedPost, User};

use super::responses::{
    CommentResponse, ConnectionResponse, CurrentUserResponse, MessageResponse, SharedPostResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            name: user.name.clone(),
            college: user.college.clone(),
            branch: user.branch.clone(),
            year: user.year,
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            image_url: user.image_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            college: user.college.clone(),
            branch: user.branch.clone(),
            year: user.year,
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            image_url: user.image_url.clone(),
            onboarded: user.is_onboarded(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Connection Mappers
// ============================================================================

impl From<&Connection> for ConnectionResponse {
    fn from(connection: &Connection) -> Self {
        Self {
            id: connection.id.to_string(),
            requester_id: connection.requester_id.to_string(),
            receiver_id: connection.receiver_id.to_string(),
            status: connection.status.as_str().to_string(),
            created_at: connection.created_at,
            updated_at: connection.updated_at,
        }
    }
}

impl From<Connection> for ConnectionResponse {
    fn from(connection: Connection) -> Self {
        Self::from(&connection)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&SharedPost> for SharedPostResponse {
    fn from(shared: &SharedPost) -> Self {
        Self {
            post_id: shared.post_id.to_string(),
            post_url: shared.post_url.clone(),
            username: shared.username.clone(),
            caption: shared.caption.clone(),
            image_url: shared.image_url.clone(),
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            receiver_id: message.receiver_id.to_string(),
            content: message.content.clone(),
            is_read: message.is_read,
            shared_post: message.shared_post().as_ref().map(SharedPostResponse::from),
            created_at: message.created_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

/// Join a comment with its author into a response
pub fn comment_response(comment: &Comment, author: &User) -> CommentResponse {
    CommentResponse {
        id: comment.id.to_string(),
        photo_id: comment.photo_id.to_string(),
        user: UserResponse::from(author),
        content: comment.content.clone(),
        parent_id: comment.parent_id.map(|id| id.to_string()),
        created_at: comment.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_core::Snowflake;

    #[test]
    fn test_message_response_decodes_shared_post() {
        let shared = SharedPost {
            post_id: Snowflake::new(42),
            post_url: "/photos/42".to_string(),
            username: "priya_s".to_string(),
            caption: "sunset".to_string(),
            image_url: "https://cdn.example/42.jpg".to_string(),
        };
        let message = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            shared.encode(),
        );

        let response = MessageResponse::from(&message);
        let decoded = response.shared_post.expect("shared post payload");
        assert_eq!(decoded.post_id, "42");
        assert_eq!(decoded.username, "priya_s");
    }

    #[test]
    fn test_plain_message_has_no_shared_post() {
        let message = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            "hello".to_string(),
        );
        let response = MessageResponse::from(&message);
        assert!(response.shared_post.is_none());
    }
}
