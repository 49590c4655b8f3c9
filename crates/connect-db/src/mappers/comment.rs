//! Comment entity <-> model mapper

use connect_core::entities::Comment;
use connect_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            photo_id: Snowflake::new(model.photo_id),
            user_id: Snowflake::new(model.user_id),
            content: model.content,
            parent_id: model.parent_id.map(Snowflake::new),
            created_at: model.created_at,
        }
    }
}
