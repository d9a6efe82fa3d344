use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An account created on first login through the identity provider.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    /// Subject identifier issued by the identity provider.
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip)]
    pub data: Option<sqlx::types::Json<serde_json::Value>>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl User {
    pub fn is_staff(&self) -> bool {
        self.is_admin
    }
}
