use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Session, User};

pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, token: &str, user_id: Uuid) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (token, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// The active user owning a session token
    pub async fn find_user(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND u.is_active
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
