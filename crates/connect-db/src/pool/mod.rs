//! Connection pooling

mod postgres;

pub use postgres::{DatabaseConfig, create_pool, create_pool_from_env};
pub use sqlx::PgPool;
