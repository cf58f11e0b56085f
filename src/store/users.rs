//! User Collection
//!
//! Usernames and emails are unique across accounts.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::User;

/// Fields of an account about to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

// == User Store ==
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<Uuid, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores a new account.
    ///
    /// Fails with `"<field> already exists"` when the username or email is
    /// taken.
    pub fn insert(&mut self, new_user: NewUser) -> Result<User> {
        if self.find_by_username(&new_user.username).is_some() {
            return Err(ApiError::InvalidRequest("username already exists".into()));
        }
        if self.users.values().any(|u| u.email == new_user.email) {
            return Err(ApiError::InvalidRequest("email already exists".into()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            name: "Test User".into(),
            email: email.into(),
            username: username.into(),
            password_hash: "hash".into(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = UserStore::new();

        let user = store.insert(new_user("ann", "ann@example.com")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(user.id).unwrap().username, "ann");
        assert_eq!(store.find_by_username("ann").unwrap().id, user.id);
        assert!(store.find_by_username("bob").is_none());
    }

    #[test]
    fn test_duplicate_username() {
        let mut store = UserStore::new();
        store.insert(new_user("ann", "ann@example.com")).unwrap();

        let err = store.insert(new_user("ann", "other@example.com")).unwrap_err();
        assert_eq!(err.message(), "username already exists");
    }

    #[test]
    fn test_duplicate_email() {
        let mut store = UserStore::new();
        store.insert(new_user("ann", "ann@example.com")).unwrap();

        let err = store.insert(new_user("annie", "ann@example.com")).unwrap_err();
        assert_eq!(err.message(), "email already exists");
        assert_eq!(store.len(), 1);
    }
}
