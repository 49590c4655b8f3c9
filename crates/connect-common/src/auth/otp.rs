//! Email OTP utilities
//!
//! Generates the short numeric codes used for passwordless sign-in. Storage
//! and attempt tracking live in the cache layer; this module only covers
//! generation and comparison.

use rand::Rng;

/// A six-digit one-time code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub const LEN: usize = 6;

    /// Generate a fresh random code
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let n: u32 = rng.gen_range(0..1_000_000);
        Self(format!("{n:06}"))
    }

    /// Wrap an already-generated code (e.g. read back from the cache)
    ///
    /// Returns None unless the input is exactly six ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a submitted code without early exit on mismatch
    #[must_use]
    pub fn matches(&self, submitted: &str) -> bool {
        if submitted.len() != self.0.len() {
            return false;
        }
        self.0
            .bytes()
            .zip(submitted.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Canonicalize an email address for lookup and storage
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
