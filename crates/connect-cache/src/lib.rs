//! # connect-cache
//!
//! Redis caching layer for OTP codes, refresh tokens, and pub/sub messaging.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **OTP Storage**: Short-lived email verification codes with attempt limits
//! - **Session Storage**: Refresh token management
//! - **Pub/Sub**: Row-insert event fan-out for toast notifications

pub mod otp;
pub mod pool;
pub mod pubsub;
pub mod session;

// Re-export pool types
pub use pool::{
    RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool, create_shared_pool,
};

// Re-export OTP types
pub use otp::{OtpStore, OtpVerification};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};

// Re-export pubsub types
pub use pubsub::{BROADCAST_CHANNEL, PubSubChannel, PubSubEvent, Publisher, USER_CHANNEL_PREFIX};
