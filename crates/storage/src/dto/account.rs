use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::recipient::RecipientResponse;
use super::volunteer::VolunteerResponse;
use crate::models::User;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub is_admin: bool,
    pub created_at: chrono::NaiveDateTime,
}

/// Everything the account page shows for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub user: UserResponse,
    pub recipient: Option<RecipientResponse>,
    pub volunteer: Option<VolunteerResponse>,
    /// The recipient the user's volunteer group is assigned to.
    pub assignment: Option<RecipientResponse>,
}

/// Registration form defaults taken from the identity provider profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitialFormResponse {
    pub name: String,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for InitialFormResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
