//! Domain entities - core business objects

mod comment;
mod connection;
mod conversation;
mod message;
mod photo;
mod user;

pub use comment::{Comment, CommentThread};
pub use connection::{Connection, ConnectionStatus, RelationshipStatus, resolve_relationship};
pub use conversation::{Conversation, aggregate_conversations};
pub use message::{Message, SharedPost};
pub use photo::{Like, Photo};
pub use user::User;
