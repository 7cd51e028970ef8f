//! User domain model.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier for a user.
pub type UserId = i32;

/// A user who can join and leave study groups.
///
/// Identity is the `user_id` alone: two `User` values with the same id
/// compare equal even when the display names differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    pub user_id: UserId,
    /// User's display name.
    pub user_name: String,
}

impl User {
    /// Creates a new user.
    pub fn new(user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}
