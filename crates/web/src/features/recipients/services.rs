use sqlx::PgPool;
use storage::{
    dto::recipient::{CreateRecipientRequest, RecipientDetailResponse, UpdateRecipientRequest},
    error::{Result, StorageError},
    models::Recipient,
    repository::{recipient::RecipientRepository, volunteer::VolunteerRepository},
};
use uuid::Uuid;

async fn own_recipient(pool: &PgPool, user_id: Uuid) -> Result<Recipient> {
    RecipientRepository::new(pool)
        .find_by_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// The user's recipient with the groups assigned to it
pub async fn get_recipient(pool: &PgPool, user_id: Uuid) -> Result<RecipientDetailResponse> {
    let recipient = own_recipient(pool, user_id).await?;
    let assignments = VolunteerRepository::new(pool)
        .list_by_recipient(recipient.id)
        .await?;

    Ok(RecipientDetailResponse {
        recipient: recipient.into(),
        assignments: assignments.into_iter().map(Into::into).collect(),
    })
}

pub async fn create_recipient(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateRecipientRequest,
) -> Result<Recipient> {
    RecipientRepository::new(pool).create(user_id, request).await
}

pub async fn update_recipient(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateRecipientRequest,
) -> Result<Recipient> {
    let existing = own_recipient(pool, user_id).await?;
    RecipientRepository::new(pool).update(&existing, request).await
}

pub async fn delete_recipient(pool: &PgPool, user_id: Uuid) -> Result<()> {
    let existing = own_recipient(pool, user_id).await?;
    RecipientRepository::new(pool).delete(existing.id).await?;
    tracing::info!(recipient_id = %existing.id, "Recipient removed");
    Ok(())
}
