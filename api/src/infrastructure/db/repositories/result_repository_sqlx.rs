use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::result_repository::{
    ResultInsertError, ResultRepository, ResultRow,
};
use crate::domain::learning::learning_type::LearningType;
use crate::infrastructure::db::{PgPool, is_foreign_key_violation};

pub struct SqlxResultRepository {
    pub pool: PgPool,
}

impl SqlxResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_result(r: &PgRow) -> anyhow::Result<ResultRow> {
    let learning_type: String = r.get("learning_type");
    Ok(ResultRow {
        id: r.get("id"),
        user_id: r.get("user_id"),
        learning_type: learning_type.parse::<LearningType>()?,
        badge_url: r.get("badge_url"),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl ResultRepository for SqlxResultRepository {
    async fn create_result(
        &self,
        user_id: Uuid,
        learning_type: LearningType,
        badge_url: &str,
    ) -> Result<ResultRow, ResultInsertError> {
        let res = sqlx::query(
            r#"INSERT INTO results (user_id, learning_type, badge_url) VALUES ($1, $2, $3)
               RETURNING id, user_id, learning_type, badge_url, created_at"#,
        )
        .bind(user_id)
        .bind(learning_type.as_str())
        .bind(badge_url)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(map_result(&row)?),
            Err(e) if is_foreign_key_violation(&e) => Err(ResultInsertError::UnknownUser(user_id)),
            Err(e) => Err(ResultInsertError::Other(e.into())),
        }
    }

    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<ResultRow>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, learning_type, badge_url, created_at FROM results
               WHERE user_id = $1
               ORDER BY created_at DESC, id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_result).collect()
    }
}
