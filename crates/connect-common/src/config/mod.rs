//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    OtpConfig, RateLimitConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
