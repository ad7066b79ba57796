use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::learning::learning_type::LearningType;

#[derive(Debug, Clone)]
pub struct OptionRow {
    pub id: Uuid,
    pub text: String,
    pub learning_type: LearningType,
}

#[derive(Debug, Clone)]
pub struct QuestionRow {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub options: Vec<OptionRow>,
}

#[derive(Debug, Clone)]
pub struct NewOption {
    pub text: String,
    pub learning_type: LearningType,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Stores the question and its options atomically, options kept in the given order.
    async fn create_question(&self, text: &str, options: &[NewOption])
    -> anyhow::Result<QuestionRow>;
    async fn list_questions(&self) -> anyhow::Result<Vec<QuestionRow>>;
}
