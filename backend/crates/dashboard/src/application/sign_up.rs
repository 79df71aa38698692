//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    full_name::FullName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{DashboardError, DashboardResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
    pub user_name: UserName,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> DashboardResult<SignUpOutput> {
        if [&input.user_name, &input.full_name, &input.email]
            .iter()
            .any(|field| field.trim().is_empty())
            || input.password.is_empty()
        {
            return Err(AppError::bad_request("All fields are required").into());
        }

        let password = RawPassword::new(input.password)?;
        let confirmation = RawPassword::new(input.confirm_password)
            .map_err(|_| AppError::bad_request("Passwords do not match"))?;
        if !password.matches(&confirmation) {
            return Err(AppError::bad_request("Passwords do not match")
                .with_action("Please re-enter the same password in both fields")
                .into());
        }

        let email = Email::new(input.email)?;
        let full_name = FullName::new(input.full_name)?;
        let user_name = UserName::new(input.user_name)?;

        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(DashboardError::UserNameTaken);
        }

        let user = User::new(user_name, full_name, email, UserPassword::from_raw(&password));

        // A concurrent sign-up can still win the race; the repository
        // reports that as UserNameTaken too.
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
            user_name: user.user_name,
        })
    }
}
