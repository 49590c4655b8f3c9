//! User entity - represents a student profile

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, Year};

/// User entity representing a student account
///
/// College, branch and year are filled in at onboarding; a user that has
/// not completed onboarding has them unset and is hidden from discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub name: String,
    pub email: String,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<Year>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            name,
            email,
            college: None,
            branch: None,
            year: None,
            bio: None,
            interests: Vec::new(),
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the user has completed onboarding (college/branch/year set)
    #[inline]
    pub fn is_onboarded(&self) -> bool {
        self.college.is_some() && self.branch.is_some() && self.year.is_some()
    }

    /// Fill in the onboarding fields
    pub fn complete_onboarding(&mut self, college: String, branch: String, year: Year) {
        self.college = Some(college);
        self.branch = Some(branch);
        self.year = Some(year);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Snowflake::new(1),
            "arjun_k".to_string(),
            "Arjun K".to_string(),
            "arjun@college.edu".to_string(),
        )
    }

    #[test]
    fn test_new_user_not_onboarded() {
        let user = sample_user();
        assert!(!user.is_onboarded());
    }

    #[test]
    fn test_complete_onboarding() {
        let mut user = sample_user();
        user.complete_onboarding("IIT Delhi".to_string(), "CSE".to_string(), Year::Second);
        assert!(user.is_onboarded());
        assert_eq!(user.year, Some(Year::Second));
    }
}
