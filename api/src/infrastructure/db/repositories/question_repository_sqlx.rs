use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::question_repository::{
    NewOption, OptionRow, QuestionRepository, QuestionRow,
};
use crate::domain::learning::learning_type::LearningType;
use crate::infrastructure::db::PgPool;

pub struct SqlxQuestionRepository {
    pub pool: PgPool,
}

impl SqlxQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for SqlxQuestionRepository {
    async fn create_question(
        &self,
        text: &str,
        options: &[NewOption],
    ) -> anyhow::Result<QuestionRow> {
        let mut tx = self.pool.begin().await?;
        let q = sqlx::query(r#"INSERT INTO questions (text) VALUES ($1) RETURNING id, text, created_at"#)
            .bind(text)
            .fetch_one(&mut *tx)
            .await?;
        let question_id: Uuid = q.get("id");

        let mut stored = Vec::with_capacity(options.len());
        for (position, opt) in options.iter().enumerate() {
            let row = sqlx::query(
                r#"INSERT INTO question_options (question_id, position, text, learning_type)
                   VALUES ($1, $2, $3, $4)
                   RETURNING id"#,
            )
            .bind(question_id)
            .bind(position as i32)
            .bind(&opt.text)
            .bind(opt.learning_type.as_str())
            .fetch_one(&mut *tx)
            .await?;
            stored.push(OptionRow {
                id: row.get("id"),
                text: opt.text.clone(),
                learning_type: opt.learning_type,
            });
        }
        tx.commit().await?;

        Ok(QuestionRow {
            id: question_id,
            text: q.get("text"),
            created_at: q.get("created_at"),
            options: stored,
        })
    }

    async fn list_questions(&self) -> anyhow::Result<Vec<QuestionRow>> {
        let questions = sqlx::query(
            r#"SELECT id, text, created_at FROM questions ORDER BY created_at ASC, id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        let option_rows = sqlx::query(
            r#"SELECT id, question_id, text, learning_type FROM question_options
               ORDER BY question_id, position"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_question: HashMap<Uuid, Vec<OptionRow>> = HashMap::new();
        for r in option_rows {
            let learning_type: String = r.get("learning_type");
            by_question
                .entry(r.get("question_id"))
                .or_default()
                .push(OptionRow {
                    id: r.get("id"),
                    text: r.get("text"),
                    learning_type: learning_type.parse::<LearningType>()?,
                });
        }

        Ok(questions
            .into_iter()
            .map(|q| {
                let id: Uuid = q.get("id");
                QuestionRow {
                    id,
                    text: q.get("text"),
                    created_at: q.get("created_at"),
                    options: by_question.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }
}
