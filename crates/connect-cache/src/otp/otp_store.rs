//! One-time code storage in Redis.
//!
//! Stores email verification codes with automatic expiration and a bounded
//! attempt counter. Keys are per normalized email, so requesting a new code
//! replaces the previous one.

use crate::pool::{RedisPool, RedisResult};
use serde::{Deserialize, Serialize};

/// Key prefix for OTP codes
const OTP_PREFIX: &str = "otp:";

/// Default TTL for OTP codes (5 minutes)
const DEFAULT_OTP_TTL: u64 = 300;

/// Default maximum verification attempts per code
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Stored OTP entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpEntry {
    /// The six-digit code
    pub code: String,
    /// Failed verification attempts so far
    pub attempts: u32,
    /// Creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl OtpEntry {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            attempts: 0,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpVerification {
    /// Code matched; the entry has been consumed
    Valid,
    /// Code did not match; attempts remaining
    Invalid,
    /// No code stored for this email (never requested, or expired)
    Expired,
    /// Attempt limit reached; the entry has been deleted
    AttemptsExhausted,
}

/// OTP store backed by Redis
#[derive(Clone)]
pub struct OtpStore {
    pool: RedisPool,
    ttl_seconds: u64,
    max_attempts: u32,
}

impl OtpStore {
    /// Create a new store with default TTL and attempt limit
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_OTP_TTL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create with custom TTL and attempt limit
    #[must_use]
    pub fn with_policy(pool: RedisPool, ttl_seconds: u64, max_attempts: u32) -> Self {
        Self {
            pool,
            ttl_seconds,
            max_attempts,
        }
    }

    /// Generate Redis key for an email
    fn key(email: &str) -> String {
        format!("{OTP_PREFIX}{email}")
    }

    /// Store a fresh code for an email, replacing any previous one
    pub async fn store(&self, email: &str, code: &str) -> RedisResult<()> {
        let entry = OtpEntry::new(code);
        self.pool
            .set(&Self::key(email), &entry, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(email = %email, "Stored OTP code");
        Ok(())
    }

    /// Verify a submitted code.
    ///
    /// A matching code consumes the entry. A mismatch increments the attempt
    /// counter while preserving the remaining TTL; once the limit is hit the
    /// entry is deleted and the caller must request a new code.
    pub async fn verify(&self, email: &str, submitted: &str) -> RedisResult<OtpVerification> {
        let key = Self::key(email);
        let Some(mut entry) = self.pool.get_value::<OtpEntry>(&key).await? else {
            return Ok(OtpVerification::Expired);
        };

        if entry.code == submitted {
            self.pool.delete(&key).await?;
            tracing::debug!(email = %email, "OTP verified");
            return Ok(OtpVerification::Valid);
        }

        entry.attempts += 1;
        if entry.attempts >= self.max_attempts {
            self.pool.delete(&key).await?;
            tracing::warn!(email = %email, attempts = entry.attempts, "OTP attempt limit reached");
            return Ok(OtpVerification::AttemptsExhausted);
        }

        let remaining_ttl = self
            .pool
            .ttl(&key)
            .await?
            .filter(|t| *t > 0)
            .map_or(self.ttl_seconds, |t| t as u64);
        self.pool.set(&key, &entry, Some(remaining_ttl)).await?;

        tracing::debug!(email = %email, attempts = entry.attempts, "OTP mismatch");
        Ok(OtpVerification::Invalid)
    }
}
