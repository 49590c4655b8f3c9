//! Chat service
//!
//! Direct messaging between users: the conversation list is an in-memory
//! aggregation over the user's full message history, threads are fetched
//! whole (clients poll them), and sends fan out a best-effort pub/sub event
//! for toast notifications.

use connect_cache::{PubSubChannel, PubSubEvent};
use connect_core::entities::{Message, SharedPost};
use connect_core::{DomainError, Snowflake, aggregate_conversations};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::{
    ConversationResponse, MarkReadResponse, MessageResponse, SendMessageRequest, SharePostRequest,
    UnreadCountResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Conversation list: one entry per counterpart with last message and
    /// unread tally, newest first
    #[instrument(skip(self))]
    pub async fn conversations(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ConversationResponse>> {
        let messages = self.ctx.message_repo().find_by_user(user_id).await?;
        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let conversations = aggregate_conversations(user_id, &messages);

        let counterpart_ids: Vec<Snowflake> =
            conversations.iter().map(|c| c.counterpart_id).collect();
        let users = self.ctx.user_repo().find_by_ids(&counterpart_ids).await?;

        Ok(conversations
            .iter()
            .filter_map(|conv| {
                let Some(user) = users.iter().find(|u| u.id == conv.counterpart_id) else {
                    warn!(counterpart_id = %conv.counterpart_id, "Conversation counterpart missing");
                    return None;
                };
                Some(ConversationResponse {
                    user: UserResponse::from(user),
                    last_message: MessageResponse::from(&conv.last_message),
                    unread_count: conv.unread_count,
                })
            })
            .collect())
    }

    /// Full thread between the user and one counterpart, ascending by time
    ///
    /// Clients refetch this on a fixed timer, so it must stay cheap and
    /// stable for unchanged threads.
    #[instrument(skip(self))]
    pub async fn thread(
        &self,
        user_id: Snowflake,
        counterpart_id: Snowflake,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .find_thread(user_id, counterpart_id)
            .await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Send a direct message
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        self.deliver(sender_id, receiver_id, request.content).await
    }

    /// Share a post into a direct message thread
    ///
    /// The post is flattened into the delimited payload the clients know how
    /// to render as a card.
    #[instrument(skip(self, request))]
    pub async fn share_post(
        &self,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        request: SharePostRequest,
    ) -> ServiceResult<MessageResponse> {
        let photo_id = request
            .photo_id
            .parse::<Snowflake>()
            .map_err(|_| ServiceError::validation(format!("invalid id: {}", request.photo_id)))?;

        let photo = self
            .ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(photo.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(photo.user_id))?;

        let shared = SharedPost {
            post_id: photo.id,
            post_url: format!("/photos/{}", photo.id),
            username: author.username,
            caption: photo.caption.unwrap_or_default(),
            image_url: photo.image_url.unwrap_or_default(),
        };

        self.deliver(sender_id, receiver_id, shared.encode()).await
    }

    /// Mark every message from the counterpart as read
    ///
    /// Scoped to one counterpart so unread counts for other threads are
    /// untouched.
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: Snowflake,
        counterpart_id: Snowflake,
    ) -> ServiceResult<MarkReadResponse> {
        let marked = self
            .ctx
            .message_repo()
            .mark_read(user_id, counterpart_id)
            .await?;

        Ok(MarkReadResponse { marked })
    }

    /// Total unread count for the navigation badge
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Snowflake) -> ServiceResult<UnreadCountResponse> {
        let unread_count = self.ctx.message_repo().unread_count(user_id).await?;
        Ok(UnreadCountResponse { unread_count })
    }

    /// Persist a message and fire the toast notification
    async fn deliver(
        &self,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        content: String,
    ) -> ServiceResult<MessageResponse> {
        if sender_id == receiver_id {
            return Err(DomainError::SelfMessage.into());
        }

        self.ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(receiver_id))?;

        let message = Message::new(self.ctx.generate_id(), sender_id, receiver_id, content);
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, receiver_id = %receiver_id, "Message sent");

        // Best-effort; the message is already persisted
        let event = PubSubEvent::new(
            "MESSAGE_CREATE",
            json!({
                "message_id": message.id.to_string(),
                "sender_id": sender_id.to_string(),
            }),
        );
        if let Err(e) = self
            .ctx
            .publisher()
            .publish(&PubSubChannel::User(receiver_id), &event)
            .await
        {
            warn!(receiver_id = %receiver_id, error = %e, "Failed to publish message event");
        }

        Ok(MessageResponse::from(&message))
    }
}
