//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed path params.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{CommentIdPath, ConnectionIdPath, PhotoIdPath, UserIdPath};
pub use validated::ValidatedJson;
