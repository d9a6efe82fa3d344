use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::PersonName;

/// Group size, stored as its legacy integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerSize {
    Xs = 110,
    Small = 120,
    Medium = 130,
    Large = 140,
    Xl = 150,
}

impl VolunteerSize {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Xs => "Extra-Small (1-2 Adults)",
            Self::Small => "Small (3-5 Adults)",
            Self::Medium => "Medium (5-9 Adults)",
            Self::Large => "Large (10-15 Adults)",
            Self::Xl => "Extra-Large (15+ Adults)",
        }
    }
}

/// A group registered to rake. `recipient_id` is its assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Volunteer {
    pub id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub person: PersonName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub size: VolunteerSize,
    pub number: Option<i32>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub recipient_id: Option<Uuid>,
    pub notes: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
    pub user_id: Option<Uuid>,
}

impl Volunteer {
    pub fn is_assigned(&self) -> bool {
        self.recipient_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_labels() {
        assert_eq!(VolunteerSize::Xs.label(), "Extra-Small (1-2 Adults)");
        assert_eq!(VolunteerSize::Xl.label(), "Extra-Large (15+ Adults)");
    }

    #[test]
    fn test_size_round_trip_names() {
        let size: VolunteerSize = serde_json::from_str("\"xl\"").unwrap();
        assert_eq!(size, VolunteerSize::Xl);
        assert_eq!(size as i32, 150);
    }
}
