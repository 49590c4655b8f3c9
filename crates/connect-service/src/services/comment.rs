//! Comment service
//!
//! Two-level comment threads on posts. Replying to a reply re-parents the
//! new comment onto the thread root, so threads never nest deeper than one
//! level. `@username` tokens in comment text fan out as synthetic direct
//! messages to the mentioned users.

use std::collections::HashMap;

use connect_cache::{PubSubChannel, PubSubEvent};
use connect_core::entities::{Comment, CommentThread, Message, User};
use connect_core::{DomainError, Snowflake, extract_mentions};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    CommentResponse, CommentThreadResponse, CreateCommentRequest, comment_response,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        photo_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let photo = self
            .ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        // A reply to a reply lands under the thread root instead
        let parent_id = match request.parent_id {
            Some(raw) => {
                let id = raw
                    .parse::<Snowflake>()
                    .map_err(|_| ServiceError::validation(format!("invalid id: {raw}")))?;
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(id))?;
                if parent.photo_id != photo_id {
                    return Err(ServiceError::validation(
                        "parent comment belongs to a different post",
                    ));
                }
                Some(parent.thread_root())
            }
            None => None,
        };

        let comment = Comment::new(
            self.ctx.generate_id(),
            photo_id,
            user_id,
            request.content,
            parent_id,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, photo_id = %photo_id, "Comment created");

        self.fan_out_mentions(&author, &comment).await?;

        if photo.user_id != user_id {
            let event = PubSubEvent::new(
                "COMMENT_CREATE",
                json!({
                    "comment_id": comment.id.to_string(),
                    "photo_id": photo_id.to_string(),
                    "user_id": user_id.to_string(),
                }),
            );
            if let Err(e) = self
                .ctx
                .publisher()
                .publish(&PubSubChannel::User(photo.user_id), &event)
                .await
            {
                warn!(comment_id = %comment.id, error = %e, "Failed to publish comment event");
            }
        }

        Ok(comment_response(&comment, &author))
    }

    /// All threads on a post: roots in order, each with its flat replies
    #[instrument(skip(self))]
    pub async fn list(&self, photo_id: Snowflake) -> ServiceResult<Vec<CommentThreadResponse>> {
        self.ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        let comments = self.ctx.comment_repo().find_by_photo(photo_id).await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let mut author_ids: Vec<Snowflake> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<Snowflake, User> = self
            .ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let threads = CommentThread::build(comments);

        Ok(threads
            .iter()
            .filter_map(|thread| {
                let root = self.with_author(&thread.root, &authors)?;
                let replies = thread
                    .replies
                    .iter()
                    .filter_map(|r| self.with_author(r, &authors))
                    .collect();
                Some(CommentThreadResponse {
                    comment: root,
                    replies,
                })
            })
            .collect())
    }

    /// Delete a comment; only its author may do this
    ///
    /// Deleting a root takes its replies with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, comment_id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.user_id != user_id {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    /// Send a synthetic DM to every `@username` mentioned in the comment
    ///
    /// Unresolvable usernames and self-mentions are skipped. Each submission
    /// fans out independently, so resubmitting the same text mentions again.
    async fn fan_out_mentions(&self, author: &User, comment: &Comment) -> ServiceResult<()> {
        for username in extract_mentions(&comment.content) {
            let Some(mentioned) = self.ctx.user_repo().find_by_username(&username).await? else {
                debug!(username = %username, "Mention did not resolve to a user");
                continue;
            };
            if mentioned.id == author.id {
                continue;
            }

            let content = format!(
                "@{} mentioned you in a comment: \"{}\"",
                author.username, comment.content
            );
            let message = Message::new(self.ctx.generate_id(), author.id, mentioned.id, content);
            self.ctx.message_repo().create(&message).await?;

            debug!(
                message_id = %message.id,
                mentioned_id = %mentioned.id,
                "Mention notification sent"
            );

            let event = PubSubEvent::new(
                "MESSAGE_CREATE",
                json!({
                    "message_id": message.id.to_string(),
                    "sender_id": author.id.to_string(),
                }),
            );
            if let Err(e) = self
                .ctx
                .publisher()
                .publish(&PubSubChannel::User(mentioned.id), &event)
                .await
            {
                warn!(mentioned_id = %mentioned.id, error = %e, "Failed to publish mention event");
            }
        }

        Ok(())
    }

    /// Join one comment with its author; a missing author drops the comment
    fn with_author(
        &self,
        comment: &Comment,
        authors: &HashMap<Snowflake, User>,
    ) -> Option<CommentResponse> {
        let Some(author) = authors.get(&comment.user_id) else {
            warn!(comment_id = %comment.id, user_id = %comment.user_id, "Comment author missing");
            return None;
        };
        Some(comment_response(comment, author))
    }
}
