//! User account and its public profile

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::note::Author;

/// A registered account. Never serialized; clients see [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }

    /// Author block stamped onto notes this user creates.
    pub fn author(&self) -> Author {
        Author {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            username: "ann".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };

        let json = serde_json::to_string(&user.profile()).unwrap();
        assert!(json.contains("ann@example.com"));
        assert!(!json.contains("argon2"));
        assert_eq!(user.author().name, "Ann");
    }
}
