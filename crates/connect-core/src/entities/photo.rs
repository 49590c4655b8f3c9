//! Photo entity - a feed post, image- or text-based

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Feed post authored by a user
///
/// Either `image_url` or `caption` must be present; a post with neither is
/// rejected at the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Create a new Photo
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        image_url: Option<String>,
        caption: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            image_url,
            caption,
            created_at: Utc::now(),
        }
    }

    /// Whether the post has any content at all
    pub fn has_content(&self) -> bool {
        self.image_url.is_some()
            || self
                .caption
                .as_deref()
                .is_some_and(|c| !c.trim().is_empty())
    }
}

/// Like marker - existence of the (photo, user) pair means "liked"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub photo_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(photo_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            photo_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
