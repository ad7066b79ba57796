use crate::application::ports::user_repository::{NewUser, UserRepository, UserRow};

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error("Name and email are required")]
    MissingFields,
    #[error("failed to persist user")]
    Persist(#[source] anyhow::Error),
}

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub class: Option<String>,
    pub phone: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    /// Returns the user already registered under this email, creating it on first sight.
    pub async fn execute(&self, req: CreateUserRequest) -> Result<UserRow, CreateUserError> {
        let name = req.name.trim();
        let email = req.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(CreateUserError::MissingFields);
        }

        if let Some(existing) = self
            .repo
            .find_by_email(email)
            .await
            .map_err(CreateUserError::Persist)?
        {
            return Ok(existing);
        }

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            class: non_blank(req.class),
            phone: non_blank(req.phone),
        };
        self.repo
            .create_user(&new_user)
            .await
            .map_err(CreateUserError::Persist)
    }
}
