use sqlx::PgPool;
use uuid::Uuid;

use super::bind_person;
use crate::dto::volunteer::{CreateVolunteerRequest, UpdateVolunteerRequest};
use crate::error::{Result, StorageError};
use crate::models::{PersonName, Volunteer};

pub struct VolunteerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VolunteerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all volunteer groups ordered by family name
    pub async fn list(&self) -> Result<Vec<Volunteer>> {
        let volunteers = sqlx::query_as::<_, Volunteer>(
            "SELECT * FROM volunteers ORDER BY last_name, first_name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(volunteers)
    }

    /// Groups assigned to a recipient
    pub async fn list_by_recipient(&self, recipient_id: Uuid) -> Result<Vec<Volunteer>> {
        let volunteers = sqlx::query_as::<_, Volunteer>(
            "SELECT * FROM volunteers WHERE recipient_id = $1 ORDER BY last_name, first_name",
        )
        .bind(recipient_id)
        .fetch_all(self.pool)
        .await?;

        Ok(volunteers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Volunteer> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Volunteer>> {
        let volunteer =
            sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(self.pool)
                .await?;

        Ok(volunteer)
    }

    /// Sign up a volunteer group for a user
    pub async fn create(&self, user_id: Uuid, req: &CreateVolunteerRequest) -> Result<Volunteer> {
        let person = PersonName::from_full_name(&req.name);

        let query = sqlx::query_as::<_, Volunteer>(
            r#"
            INSERT INTO volunteers (name, formal_name, familiar_name, greeting_name, prefix,
                                    first_name, middle_name, last_name, nick_name, suffix,
                                    email, phone, address, size, number, adults, children,
                                    notes, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    $18, $19)
            RETURNING *
            "#,
        );

        let volunteer = bind_person(query, &person)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.address)
            .bind(req.size)
            .bind(req.number)
            .bind(req.adults)
            .bind(req.children)
            .bind(&req.notes)
            .bind(user_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).describe_violation(
                    "A volunteer group is already registered for this account",
                    "User does not exist",
                )
            })?;

        tracing::info!(volunteer_id = %volunteer.id, "Volunteer group signed up");

        Ok(volunteer)
    }

    /// Update a volunteer group, re-deriving the name columns when the name changes
    pub async fn update(
        &self,
        existing: &Volunteer,
        req: &UpdateVolunteerRequest,
    ) -> Result<Volunteer> {
        let person = existing.person.renamed(req.name.as_deref());
        let email = req.email.as_ref().or(existing.email.as_ref());
        let phone = req.phone.as_ref().or(existing.phone.as_ref());
        let address = req.address.as_ref().or(existing.address.as_ref());
        let size = req.size.unwrap_or(existing.size);
        let number = req.number.or(existing.number);
        let adults = req.adults.or(existing.adults);
        let children = req.children.or(existing.children);
        let notes = req.notes.as_ref().unwrap_or(&existing.notes);

        let query = sqlx::query_as::<_, Volunteer>(
            r#"
            UPDATE volunteers
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
                number = $16,
                adults = $17,
                children = $18,
                notes = $19,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(existing.id);

        let volunteer = bind_person(query, &person)
            .bind(email)
            .bind(phone)
            .bind(address)
            .bind(size)
            .bind(number)
            .bind(adults)
            .bind(children)
            .bind(notes)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(volunteer)
    }

    /// Point a group at a recipient, or clear the assignment
    pub async fn assign(&self, id: Uuid, recipient_id: Option<Uuid>) -> Result<Volunteer> {
        let volunteer = sqlx::query_as::<_, Volunteer>(
            r#"
            UPDATE volunteers
            SET recipient_id = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(recipient_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).describe_violation(
                "Volunteer is already assigned",
                "Recipient does not exist",
            )
        })?
        .ok_or(StorageError::NotFound)?;

        tracing::info!(
            volunteer_id = %volunteer.id,
            recipient_id = ?volunteer.recipient_id,
            "Volunteer assignment changed"
        );

        Ok(volunteer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
