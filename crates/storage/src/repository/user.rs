use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the user on first login, otherwise refresh the profile copy.
    /// Activity and staff flags are never touched here.
    pub async fn upsert_profile(
        &self,
        username: &str,
        name: &str,
        email: Option<&str>,
        data: &serde_json::Value,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, name, email, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO UPDATE
            SET name = EXCLUDED.name,
                email = EXCLUDED.email,
                data = EXCLUDED.data,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(name)
        .bind(email)
        .bind(sqlx::types::Json(data))
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user. Their sessions go with them; registrations are unlinked.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
