use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::{
        recipient::{RecipientActualsRequest, RecipientSummary},
        volunteer::{AssignmentRequest, VolunteerDetailResponse, VolunteerResponse},
    },
    error::Result,
    models::{Recipient, Volunteer},
    repository::{recipient::RecipientRepository, volunteer::VolunteerRepository},
};
use uuid::Uuid;

use crate::features::volunteers::services::with_assignment;

pub async fn list_volunteers(pool: &PgPool) -> Result<Vec<VolunteerResponse>> {
    let volunteers = VolunteerRepository::new(pool).list().await?;
    Ok(volunteers.into_iter().map(Into::into).collect())
}

pub async fn get_volunteer(pool: &PgPool, id: Uuid) -> Result<VolunteerDetailResponse> {
    let volunteer = VolunteerRepository::new(pool).find_by_id(id).await?;
    with_assignment(pool, volunteer).await
}

pub async fn assign_volunteer(
    pool: &PgPool,
    id: Uuid,
    request: &AssignmentRequest,
) -> Result<Volunteer> {
    VolunteerRepository::new(pool)
        .assign(id, request.recipient_id)
        .await
}

pub async fn list_recipients(pool: &PgPool) -> Result<Vec<RecipientSummary>> {
    RecipientRepository::new(pool).list_with_totals().await
}

pub async fn record_actuals(
    pool: &PgPool,
    id: Uuid,
    request: &RecipientActualsRequest,
) -> Result<Recipient> {
    let repo = RecipientRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    let updated = repo.update_actuals(&existing, request).await?;

    tracing::info!(recipient_id = %id, bags = ?updated.bags, "Recorded actuals");

    Ok(updated)
}

/// Every volunteer group, in roster order, paired with its assigned recipient
pub async fn roster(pool: &PgPool) -> Result<Vec<(Volunteer, Option<Recipient>)>> {
    let volunteers = VolunteerRepository::new(pool).list().await?;
    let recipients: HashMap<Uuid, Recipient> = RecipientRepository::new(pool)
        .list()
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    Ok(volunteers
        .into_iter()
        .map(|volunteer| {
            let recipient = volunteer
                .recipient_id
                .and_then(|id| recipients.get(&id).cloned());
            (volunteer, recipient)
        })
        .collect())
}

/// The roster entry for a single volunteer group
pub async fn roster_entry(pool: &PgPool, id: Uuid) -> Result<(Volunteer, Option<Recipient>)> {
    let volunteer = VolunteerRepository::new(pool).find_by_id(id).await?;
    let recipient = match volunteer.recipient_id {
        Some(recipient_id) => Some(RecipientRepository::new(pool).find_by_id(recipient_id).await?),
        None => None,
    };
    Ok((volunteer, recipient))
}
