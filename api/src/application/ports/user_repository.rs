use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub class: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub class: Option<String>,
    pub phone: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user, or returns the stored row untouched when the email is taken.
    async fn create_user(&self, user: &NewUser) -> anyhow::Result<UserRow>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>>;
}
