//! # connect-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `connect-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use connect_db::pool::{create_pool, DatabaseConfig};
//! use connect_db::repositories::PgUserRepository;
//! use connect_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{DatabaseConfig, PgPool, create_pool, create_pool_from_env};
pub use repositories::{
    PgCommentRepository, PgConnectionRepository, PgLikeRepository, PgMessageRepository,
    PgPhotoRepository, PgUserRepository,
};
