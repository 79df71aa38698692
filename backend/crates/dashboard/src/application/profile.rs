//! Profile Use Case
//!
//! Read and edit the signed-in user's profile.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, full_name::FullName, theme::ThemePreference, user_name::UserName,
    user_password::RawPassword,
};
use crate::error::{DashboardError, DashboardResult};

/// Profile update input. `theme` is parsed leniently: anything other
/// than "dark" means light.
pub struct UpdateProfileInput {
    pub full_name: String,
    pub email: String,
    pub theme: Option<String>,
}

pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn get(&self, user_id: &UserId) -> DashboardResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DashboardError::NotFound("User"))
    }

    pub async fn update(&self, user_id: &UserId, input: UpdateProfileInput) -> DashboardResult<User> {
        let mut user = self.get(user_id).await?;

        let full_name = FullName::new(input.full_name)?;
        let email = Email::new(input.email)?;
        let theme = input
            .theme
            .as_deref()
            .map(ThemePreference::parse)
            .unwrap_or(user.theme);

        user.update_profile(full_name, email, theme);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, theme = %user.theme, "Profile updated");
        Ok(user)
    }

    /// Check a user name / password pair without creating a session
    pub async fn validate_user(&self, user_name: &str, password: &str) -> DashboardResult<bool> {
        let (Ok(user_name), Ok(password)) = (
            UserName::new(user_name),
            RawPassword::new(password.to_string()),
        ) else {
            return Ok(false);
        };

        Ok(self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .is_some_and(|user| user.password.verify(&password)))
    }
}
