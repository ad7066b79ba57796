use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::user_repository::{NewUser, UserRepository, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(r: &PgRow) -> UserRow {
    UserRow {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        class: r.get("class"),
        phone: r.get("phone"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(&self, user: &NewUser) -> anyhow::Result<UserRow> {
        // No-op update so a concurrent insert of the same email still returns the stored row.
        let row = sqlx::query(
            r#"INSERT INTO users (name, email, class, phone) VALUES ($1, $2, $3, $4)
               ON CONFLICT ON CONSTRAINT users_email_unique DO UPDATE SET email = EXCLUDED.email
               RETURNING id, name, email, class, phone, created_at"#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.class)
        .bind(&user.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_user(&row))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, name, email, class, phone, created_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, name, email, class, phone, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }
}
