//! User entity <-> model mapper

use connect_core::entities::User;
use connect_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// An unparseable `year` column is treated as unset rather than failing the
/// whole row.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            name: model.name,
            email: model.email,
            college: model.college,
            branch: model.branch,
            year: model.year.and_then(|y| y.parse().ok()),
            bio: model.bio,
            interests: model.interests,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use connect_core::Year;

    fn model() -> UserModel {
        UserModel {
            id: 7,
            username: "riya_m".to_string(),
            name: "Riya M".to_string(),
            email: "riya@college.edu".to_string(),
            college: Some("NIT Trichy".to_string()),
            branch: Some("ECE".to_string()),
            year: Some("3rd".to_string()),
            bio: None,
            interests: vec!["photography".to_string()],
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let user = User::from(model());
        assert_eq!(user.id, Snowflake::new(7));
        assert_eq!(user.year, Some(Year::Third));
        assert!(user.is_onboarded());
    }

    #[test]
    fn test_bad_year_column_becomes_unset() {
        let mut m = model();
        m.year = Some("fifth".to_string());
        let user = User::from(m);
        assert_eq!(user.year, None);
    }
}
