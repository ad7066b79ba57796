use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::learning::learning_type::LearningType;

#[derive(Debug, Clone)]
pub struct ResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub learning_type: LearningType,
    pub badge_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum ResultInsertError {
    #[error("user {0} does not exist")]
    UnknownUser(Uuid),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn create_result(
        &self,
        user_id: Uuid,
        learning_type: LearningType,
        badge_url: &str,
    ) -> Result<ResultRow, ResultInsertError>;
    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<ResultRow>>;
}
