//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, full_name::FullName, theme::ThemePreference, user_name::UserName,
    user_password::UserPassword,
};

/// Registered user
///
/// The credential record lives on the user row, so deleting the account
/// deletes the credential.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    pub full_name: FullName,
    pub email: Email,
    pub password: UserPassword,
    pub theme: ThemePreference,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default (light) theme
    pub fn new(user_name: UserName, full_name: FullName, email: Email, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            full_name,
            email,
            password,
            theme: ThemePreference::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable profile fields
    pub fn update_profile(&mut self, full_name: FullName, email: Email, theme: ThemePreference) {
        self.full_name = full_name;
        self.email = email;
        self.theme = theme;
        self.updated_at = Utc::now();
    }
}
