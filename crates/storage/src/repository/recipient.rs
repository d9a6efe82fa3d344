use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::bind_person;
use crate::dto::recipient::{
    CreateRecipientRequest, RecipientActualsRequest, RecipientSummary, UpdateRecipientRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{PersonName, Recipient};

#[derive(FromRow)]
struct RecipientTotalsRow {
    #[sqlx(flatten)]
    recipient: Recipient,
    is_assigned: bool,
    total: Option<i64>,
}

pub struct RecipientRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecipientRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all recipients ordered by family name
    pub async fn list(&self) -> Result<Vec<Recipient>> {
        let recipients = sqlx::query_as::<_, Recipient>(
            "SELECT * FROM recipients ORDER BY last_name, first_name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(recipients)
    }

    /// List recipients with whether anyone is assigned and the assigned head count
    pub async fn list_with_totals(&self) -> Result<Vec<RecipientSummary>> {
        let rows = sqlx::query_as::<_, RecipientTotalsRow>(
            r#"
            SELECT r.*,
                   COUNT(v.id) > 0 AS is_assigned,
                   SUM(v.number)::BIGINT AS total
            FROM recipients r
            LEFT JOIN volunteers v ON v.recipient_id = r.id
            GROUP BY r.id
            ORDER BY r.last_name, r.first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecipientSummary {
                recipient: row.recipient.into(),
                is_assigned: row.is_assigned,
                total: row.total,
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Recipient> {
        sqlx::query_as::<_, Recipient>("SELECT * FROM recipients WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// The recipient registered by a user, if any
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Recipient>> {
        let recipient =
            sqlx::query_as::<_, Recipient>("SELECT * FROM recipients WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(self.pool)
                .await?;

        Ok(recipient)
    }

    /// Register a recipient for a user. The name is parsed here so the
    /// derived columns are written with the raw name.
    pub async fn create(&self, user_id: Uuid, req: &CreateRecipientRequest) -> Result<Recipient> {
        let person = PersonName::from_full_name(&req.name);

        let query = sqlx::query_as::<_, Recipient>(
            r#"
            INSERT INTO recipients (name, formal_name, familiar_name, greeting_name, prefix,
                                    first_name, middle_name, last_name, nick_name, suffix,
                                    email, phone, address, size, is_dog, notes, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        );

        let recipient = bind_person(query, &person)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.address)
            .bind(req.size)
            .bind(req.is_dog)
            .bind(&req.notes)
            .bind(user_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).describe_violation(
                    "A recipient is already registered for this account",
                    "User does not exist",
                )
            })?;

        tracing::info!(recipient_id = %recipient.id, "Recipient registered");

        Ok(recipient)
    }

    /// Update a recipient, re-deriving the name columns when the name changes
    pub async fn update(
        &self,
        existing: &Recipient,
        req: &UpdateRecipientRequest,
    ) -> Result<Recipient> {
        let person = existing.person.renamed(req.name.as_deref());
        let email = req.email.as_ref().or(existing.email.as_ref());
        let phone = req.phone.as_ref().or(existing.phone.as_ref());
        let address = req.address.as_ref().or(existing.address.as_ref());
        let size = req.size.unwrap_or(existing.size);
        let is_dog = req.is_dog.unwrap_or(existing.is_dog);
        let notes = req.notes.as_ref().unwrap_or(&existing.notes);

        let query = sqlx::query_as::<_, Recipient>(
            r#"
            UPDATE recipients
            SET name = $2,
                formal_name = $3,
                familiar_name = $4,
                greeting_name = $5,
                prefix = $6,
                first_name = $7,
                middle_name = $8,
                last_name = $9,
                nick_name = $10,
                suffix = $11,
                email = $12,
                phone = $13,
                address = $14,
                size = $15,
                is_dog = $16,
                notes = $17,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(existing.id);

        let recipient = bind_person(query, &person)
            .bind(email)
            .bind(phone)
            .bind(address)
            .bind(size)
            .bind(is_dog)
            .bind(notes)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(recipient)
    }

    /// Record what was actually collected at a recipient
    pub async fn update_actuals(
        &self,
        existing: &Recipient,
        req: &RecipientActualsRequest,
    ) -> Result<Recipient> {
        let recipient = sqlx::query_as::<_, Recipient>(
            r#"
            UPDATE recipients
            SET bags = $2,
                hours = $3,
                adults = $4,
                children = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(existing.id)
        .bind(req.bags.or(existing.bags))
        .bind(req.hours.or(existing.hours))
        .bind(req.adults.or(existing.adults))
        .bind(req.children.or(existing.children))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(recipient)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM recipients WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
