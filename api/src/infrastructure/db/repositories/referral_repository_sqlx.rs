use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::referral_repository::{
    ReferralInsertError, ReferralRepository, ReferralRow,
};
use crate::infrastructure::db::{PgPool, is_unique_violation};

pub struct SqlxReferralRepository {
    pub pool: PgPool,
}

impl SqlxReferralRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_referral(r: &PgRow) -> ReferralRow {
    ReferralRow {
        id: r.get("id"),
        name: r.get("name"),
        phone: r.get("phone"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl ReferralRepository for SqlxReferralRepository {
    async fn create_referral(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<ReferralRow, ReferralInsertError> {
        let res = sqlx::query(
            r#"INSERT INTO referrals (name, phone) VALUES ($1, $2)
               RETURNING id, name, phone, created_at"#,
        )
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(map_referral(&row)),
            Err(e) if is_unique_violation(&e) => Err(ReferralInsertError::DuplicatePhone),
            Err(e) => Err(ReferralInsertError::Other(e.into())),
        }
    }

    async fn list_referrals(&self) -> anyhow::Result<Vec<ReferralRow>> {
        let rows = sqlx::query(
            r#"SELECT id, name, phone, created_at FROM referrals
               ORDER BY created_at DESC, id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_referral).collect())
    }
}
