//! User entity - an account that can log in and mutate planets.

use crate::NewUser;

/// A registered user.
///
/// The password is stored exactly as submitted. There is no hashing step;
/// password retrieval mails it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Combine a store-assigned id with the registration draft
    pub fn from_new(user_id: i64, new_user: NewUser) -> Self {
        Self {
            user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password: new_user.password,
        }
    }
}
