//! Entity to model mappers
//!
//! This module provides conversions between domain entities (connect-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - helper functions for enum <-> column text conversions

mod comment;
mod connection;
mod message;
mod photo;
mod user;

pub use connection::{connection_status_from_str, connection_status_to_str};
