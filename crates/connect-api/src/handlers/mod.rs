//! HTTP request handlers
//!
//! Thin translation layer between HTTP and the service layer. Handlers
//! extract and validate input, call a service, and shape the response.

pub mod auth;
pub mod comments;
pub mod connections;
pub mod conversations;
pub mod health;
pub mod photos;
pub mod users;
