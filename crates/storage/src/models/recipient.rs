use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::PersonName;

/// Yard size, stored as its legacy integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum RecipientSize {
    Small = 110,
    Medium = 120,
    Large = 130,
}

impl RecipientSize {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (1-15 bags)",
            Self::Medium => "Medium (16-30 bags)",
            Self::Large => "Large (31+ bags)",
        }
    }
}

/// A household registered to receive raking help.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recipient {
    pub id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub person: PersonName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub size: RecipientSize,
    pub is_dog: bool,
    pub notes: String,
    /// Actuals recorded by staff after the event.
    pub bags: Option<i32>,
    pub hours: Option<Decimal>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_labels() {
        assert_eq!(RecipientSize::Small.label(), "Small (1-15 bags)");
        assert_eq!(RecipientSize::Large.label(), "Large (31+ bags)");
    }

    #[test]
    fn test_size_codes() {
        assert_eq!(RecipientSize::Small as i32, 110);
        assert_eq!(RecipientSize::Medium as i32, 120);
        assert_eq!(RecipientSize::Large as i32, 130);
    }

    #[test]
    fn test_size_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&RecipientSize::Medium).unwrap(),
            "\"medium\""
        );
        let size: RecipientSize = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(size, RecipientSize::Large);
    }
}
