//! Feed service
//!
//! Posts are images and/or captions; the feed joins each post with its
//! author, like count, comment count, and whether the viewer liked it.

use connect_cache::{PubSubChannel, PubSubEvent};
use connect_core::entities::{Like, Photo, User};
use connect_core::traits::PhotoQuery;
use connect_core::{DomainError, Snowflake};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::{CreatePhotoRequest, FeedRequest, LikeCountResponse, PhotoResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for the feed
const DEFAULT_FEED_LIMIT: i64 = 20;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreatePhotoRequest,
    ) -> ServiceResult<PhotoResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let photo = Photo::new(
            self.ctx.generate_id(),
            user_id,
            request.image_url,
            request.caption,
        );
        if !photo.has_content() {
            return Err(DomainError::EmptyPost.into());
        }

        self.ctx.photo_repo().create(&photo).await?;

        info!(photo_id = %photo.id, "Post created");

        // Best-effort broadcast so feeds can toast about new posts
        let event = PubSubEvent::new(
            "PHOTO_CREATE",
            json!({
                "photo_id": photo.id.to_string(),
                "user_id": user_id.to_string(),
            }),
        );
        if let Err(e) = self
            .ctx
            .publisher()
            .publish(&PubSubChannel::Broadcast, &event)
            .await
        {
            warn!(photo_id = %photo.id, error = %e, "Failed to publish post event");
        }

        self.assemble_one(user_id, &photo, &author).await
    }

    /// The global feed, newest first, keyset-paginated
    #[instrument(skip(self, request))]
    pub async fn feed(
        &self,
        viewer_id: Snowflake,
        request: FeedRequest,
    ) -> ServiceResult<Vec<PhotoResponse>> {
        let before = match request.before {
            Some(raw) => Some(
                raw.parse::<Snowflake>()
                    .map_err(|_| ServiceError::validation(format!("invalid cursor: {raw}")))?,
            ),
            None => None,
        };

        let query = PhotoQuery {
            before,
            limit: request.limit.unwrap_or(DEFAULT_FEED_LIMIT),
        };
        let photos = self.ctx.photo_repo().find_recent(&query).await?;

        self.assemble(viewer_id, &photos).await
    }

    /// A single post
    #[instrument(skip(self))]
    pub async fn get(&self, viewer_id: Snowflake, photo_id: Snowflake) -> ServiceResult<PhotoResponse> {
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

        self.assemble_one(viewer_id, &photo, &author).await
    }

    /// All posts by one user, newest first
    #[instrument(skip(self))]
    pub async fn user_photos(
        &self,
        viewer_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<PhotoResponse>> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let photos = self.ctx.photo_repo().find_by_user(user_id).await?;
        self.assemble(viewer_id, &photos).await
    }

    /// Delete a post; only the owner may do this
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, photo_id: Snowflake) -> ServiceResult<()> {
        let photo = self
            .ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        if photo.user_id != user_id {
            return Err(DomainError::NotPhotoOwner.into());
        }

        self.ctx.photo_repo().delete(photo_id).await?;

        info!(photo_id = %photo_id, "Post deleted");
        Ok(())
    }

    /// Like a post; liking twice is a no-op that returns the current count
    #[instrument(skip(self))]
    pub async fn like(
        &self,
        user_id: Snowflake,
        photo_id: Snowflake,
    ) -> ServiceResult<LikeCountResponse> {
        let photo = self
            .ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        let like = Like::new(photo_id, user_id);
        let newly_liked = match self.ctx.like_repo().create(&like).await {
            Ok(()) => true,
            Err(DomainError::AlreadyLiked) => false,
            Err(e) => return Err(e.into()),
        };

        if newly_liked && photo.user_id != user_id {
            let event = PubSubEvent::new(
                "LIKE_CREATE",
                json!({
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
                warn!(photo_id = %photo_id, error = %e, "Failed to publish like event");
            }
        }

        let like_count = self.ctx.like_repo().count_for_photo(photo_id).await?;
        Ok(LikeCountResponse {
            photo_id: photo_id.to_string(),
            like_count,
            liked_by_me: true,
        })
    }

    /// Remove a like; removing a like that does not exist is a no-op
    #[instrument(skip(self))]
    pub async fn unlike(
        &self,
        user_id: Snowflake,
        photo_id: Snowflake,
    ) -> ServiceResult<LikeCountResponse> {
        self.ctx
            .photo_repo()
            .find_by_id(photo_id)
            .await?
            .ok_or(DomainError::PhotoNotFound(photo_id))?;

        self.ctx.like_repo().delete(photo_id, user_id).await?;

        let like_count = self.ctx.like_repo().count_for_photo(photo_id).await?;
        Ok(LikeCountResponse {
            photo_id: photo_id.to_string(),
            like_count,
            liked_by_me: false,
        })
    }

    /// Join a page of posts with authors, counts, and the viewer's likes
    async fn assemble(
        &self,
        viewer_id: Snowflake,
        photos: &[Photo],
    ) -> ServiceResult<Vec<PhotoResponse>> {
        if photos.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<Snowflake> = photos.iter().map(|p| p.user_id).collect();
        let authors = self.ctx.user_repo().find_by_ids(&author_ids).await?;

        let photo_ids: Vec<Snowflake> = photos.iter().map(|p| p.id).collect();
        let liked = self.ctx.like_repo().liked_of(viewer_id, &photo_ids).await?;

        let mut items = Vec::with_capacity(photos.len());
        for photo in photos {
            let Some(author) = authors.iter().find(|u| u.id == photo.user_id) else {
                warn!(photo_id = %photo.id, user_id = %photo.user_id, "Post author missing");
                continue;
            };

            let like_count = self.ctx.like_repo().count_for_photo(photo.id).await?;
            let comment_count = self.ctx.comment_repo().count_for_photo(photo.id).await?;

            items.push(PhotoResponse {
                id: photo.id.to_string(),
                author: UserResponse::from(author),
                image_url: photo.image_url.clone(),
                caption: photo.caption.clone(),
                like_count,
                comment_count,
                liked_by_me: liked.contains(&photo.id),
                created_at: photo.created_at,
            });
        }

        Ok(items)
    }

    /// Single-post variant of [`Self::assemble`]
    async fn assemble_one(
        &self,
        viewer_id: Snowflake,
        photo: &Photo,
        author: &User,
    ) -> ServiceResult<PhotoResponse> {
        let like_count = self.ctx.like_repo().count_for_photo(photo.id).await?;
        let comment_count = self.ctx.comment_repo().count_for_photo(photo.id).await?;
        let liked_by_me = self.ctx.like_repo().exists(photo.id, viewer_id).await?;

        Ok(PhotoResponse {
            id: photo.id.to_string(),
            author: UserResponse::from(author),
            image_url: photo.image_url.clone(),
            caption: photo.caption.clone(),
            like_count,
            comment_count,
            liked_by_me,
            created_at: photo.created_at,
        })
    }
}
