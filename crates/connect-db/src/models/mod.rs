//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod connection;
mod message;
mod photo;
mod user;

pub use comment::CommentModel;
pub use connection::ConnectionModel;
pub use message::MessageModel;
pub use photo::{LikeModel, PhotoModel};
pub use user::UserModel;
