//! Authentication utilities

mod jwt;
mod otp;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use otp::{OtpCode, normalize_email};
