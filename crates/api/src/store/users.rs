//! Legacy user store operations. No HTTP surface; kept for compatibility
//! with the original site.

use elite_driving_core::UserId;

use super::Store;
use crate::models::{NewUser, User};

impl Store {
    /// Create a legacy user account.
    pub fn create_user(&self, new: NewUser) -> User {
        let user = User {
            id: UserId::generate(),
            username: new.username,
            password: new.password,
        };
        self.write().users.insert(user.id, user.clone());
        user
    }

    /// Fetch a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// Fetch a user by exact username match.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup() {
        let store = Store::new();
        let user = store.create_user(NewUser {
            username: "frontdesk".to_owned(),
            password: "hunter2".to_owned(),
        });

        assert_eq!(store.user(user.id).unwrap().username, "frontdesk");
        assert_eq!(store.user_by_username("frontdesk").unwrap().id, user.id);
        assert!(store.user_by_username("nobody").is_none());
        assert!(store.user(UserId::generate()).is_none());
    }
}
