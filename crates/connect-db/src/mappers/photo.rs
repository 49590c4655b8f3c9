//! Photo and Like entity <-> model mappers

use connect_core::entities::{Like, Photo};
use connect_core::value_objects::Snowflake;

use crate::models::{LikeModel, PhotoModel};

/// Convert PhotoModel to Photo entity
impl From<PhotoModel> for Photo {
    fn from(model: PhotoModel) -> Self {
        Photo {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            image_url: model.image_url,
            caption: model.caption,
            created_at: model.created_at,
        }
    }
}

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            photo_id: Snowflake::new(model.photo_id),
            user_id: Snowflake::new(model.user_id),
            created_at: model.created_at,
        }
    }
}
