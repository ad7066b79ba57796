use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ReferralRow {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum ReferralInsertError {
    #[error("phone number already referred")]
    DuplicatePhone,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait ReferralRepository: Send + Sync {
    async fn create_referral(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<ReferralRow, ReferralInsertError>;
    /// Newest first.
    async fn list_referrals(&self) -> anyhow::Result<Vec<ReferralRow>>;
}
