use sqlx::PgPool;
use storage::{
    dto::account::AccountResponse,
    error::Result,
    models::User,
    repository::{
        recipient::RecipientRepository, user::UserRepository, volunteer::VolunteerRepository,
    },
};

/// Gather the user's registrations and their group's assignment
pub async fn get_account(pool: &PgPool, user: User) -> Result<AccountResponse> {
    let recipient = RecipientRepository::new(pool).find_by_user(user.id).await?;
    let volunteer = VolunteerRepository::new(pool).find_by_user(user.id).await?;

    let assignment = match volunteer.as_ref().and_then(|v| v.recipient_id) {
        Some(recipient_id) => Some(RecipientRepository::new(pool).find_by_id(recipient_id).await?),
        None => None,
    };

    Ok(AccountResponse {
        user: user.into(),
        recipient: recipient.map(Into::into),
        volunteer: volunteer.map(Into::into),
        assignment: assignment.map(Into::into),
    })
}

/// Delete the user. Registrations stay behind without an owner.
pub async fn delete_account(pool: &PgPool, user: &User) -> Result<()> {
    UserRepository::new(pool).delete(user.id).await?;
    tracing::info!(user_id = %user.id, "Account deleted");
    Ok(())
}
