//! # connect-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentThread, Connection, ConnectionStatus, Conversation, Like, Message, Photo,
    RelationshipStatus, SharedPost, User, aggregate_conversations, resolve_relationship,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, ConnectionRepository, DiscoverFilter, LikeRepository, MessageRepository,
    PhotoQuery, PhotoRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    Snowflake, SnowflakeGenerator, SnowflakeParseError, Year, extract_mentions,
};
