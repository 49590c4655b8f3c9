//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
///
/// `year` is stored as its wire text ("1st".."4th"); `interests` is a
/// Postgres TEXT[].
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Whether the onboarding fields are filled in
    #[inline]
    pub fn is_onboarded(&self) -> bool {
        self.college.is_some() && self.branch.is_some() && self.year.is_some()
    }
}
