//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in connect-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod connection;
mod error;
mod like;
mod message;
mod photo;
mod user;

pub use comment::PgCommentRepository;
pub use connection::PgConnectionRepository;
pub use like::PgLikeRepository;
pub use message::PgMessageRepository;
pub use photo::PgPhotoRepository;
pub use user::PgUserRepository;
