//! User service
//!
//! Profile management, onboarding, and the discovery/search feed.

use chrono::Utc;
use connect_core::traits::DiscoverFilter;
use connect_core::{DomainError, Snowflake, resolve_relationship};
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, DiscoverRequest, DiscoverUserResponse, OnboardingRequest,
    UpdateProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default page size for discovery
const DEFAULT_DISCOVER_LIMIT: i64 = 20;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Complete onboarding: pick a username and fill in college details
    ///
    /// A user only shows up in discovery once this has run.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn complete_onboarding(
        &self,
        user_id: Snowflake,
        request: OnboardingRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if request.username != user.username
            && self
                .ctx
                .user_repo()
                .username_exists(&request.username)
                .await?
        {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        user.username = request.username;
        user.name = request.name;
        user.complete_onboarding(request.college, request.branch, request.year);

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Onboarding completed");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the free-form profile fields
    ///
    /// Absent fields are left untouched; sending a field replaces it.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(bio) = request.bio {
            user.bio = Some(bio);
        }
        if let Some(interests) = request.interests {
            user.interests = interests;
        }
        if let Some(image_url) = request.image_url {
            user.image_url = Some(image_url);
        }
        user.updated_at = Utc::now();

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Get another user's profile together with the viewer's relationship to it
    #[instrument(skip(self))]
    pub async fn get_profile(
        &self,
        viewer_id: Snowflake,
        subject_id: Snowflake,
    ) -> ServiceResult<DiscoverUserResponse> {
        let subject = self
            .ctx
            .user_repo()
            .find_by_id(subject_id)
            .await?
            .ok_or(DomainError::UserNotFound(subject_id))?;

        let connections = self.ctx.connection_repo().find_by_user(viewer_id).await?;
        let relationship = resolve_relationship(viewer_id, subject_id, &connections);

        Ok(DiscoverUserResponse {
            user: UserResponse::from(&subject),
            relationship,
        })
    }

    /// Search onboarded users for the discovery feed
    ///
    /// The viewer is excluded from results, and each entry carries the
    /// viewer's relationship to that user so the card can render the right
    /// connect button.
    #[instrument(skip(self, request))]
    pub async fn discover(
        &self,
        viewer_id: Snowflake,
        request: DiscoverRequest,
    ) -> ServiceResult<Vec<DiscoverUserResponse>> {
        let filter = DiscoverFilter {
            query: request.q.filter(|q| !q.trim().is_empty()),
            college: request.college,
            branch: request.branch,
            year: request.year,
            limit: request.limit.unwrap_or(DEFAULT_DISCOVER_LIMIT),
            offset: request.offset.unwrap_or(0).max(0),
        };

        let users = self.ctx.user_repo().search(&filter).await?;
        let connections = self.ctx.connection_repo().find_by_user(viewer_id).await?;

        Ok(users
            .iter()
            .filter(|u| u.id != viewer_id)
            .map(|u| DiscoverUserResponse {
                user: UserResponse::from(u),
                relationship: resolve_relationship(viewer_id, u.id, &connections),
            })
            .collect())
    }
}
