use sqlx::PgPool;
use storage::{
    dto::{
        recipient::RecipientResponse,
        volunteer::{CreateVolunteerRequest, UpdateVolunteerRequest, VolunteerDetailResponse},
    },
    error::{Result, StorageError},
    models::Volunteer,
    repository::{recipient::RecipientRepository, volunteer::VolunteerRepository},
};
use uuid::Uuid;

async fn own_volunteer(pool: &PgPool, user_id: Uuid) -> Result<Volunteer> {
    VolunteerRepository::new(pool)
        .find_by_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// Attach the assigned recipient, if any, to a volunteer group
pub async fn with_assignment(pool: &PgPool, volunteer: Volunteer) -> Result<VolunteerDetailResponse> {
    let assignment = match volunteer.recipient_id {
        Some(recipient_id) => Some(RecipientResponse::from(
            RecipientRepository::new(pool).find_by_id(recipient_id).await?,
        )),
        None => None,
    };

    Ok(VolunteerDetailResponse {
        volunteer: volunteer.into(),
        assignment,
    })
}

pub async fn get_volunteer(pool: &PgPool, user_id: Uuid) -> Result<VolunteerDetailResponse> {
    let volunteer = own_volunteer(pool, user_id).await?;
    with_assignment(pool, volunteer).await
}

pub async fn create_volunteer(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateVolunteerRequest,
) -> Result<Volunteer> {
    VolunteerRepository::new(pool).create(user_id, request).await
}

pub async fn update_volunteer(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateVolunteerRequest,
) -> Result<Volunteer> {
    let existing = own_volunteer(pool, user_id).await?;
    VolunteerRepository::new(pool).update(&existing, request).await
}

pub async fn delete_volunteer(pool: &PgPool, user_id: Uuid) -> Result<()> {
    let existing = own_volunteer(pool, user_id).await?;
    VolunteerRepository::new(pool).delete(existing.id).await?;
    tracing::info!(volunteer_id = %existing.id, "Volunteer group removed");
    Ok(())
}
