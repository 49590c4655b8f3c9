//! Redis connection pooling

mod redis_pool;

pub use redis_pool::{
    RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool, create_shared_pool,
};
