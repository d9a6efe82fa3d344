use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_not_blank, validate_phone};
use super::recipient::RecipientResponse;
use crate::models::{PersonName, Volunteer, VolunteerSize};

/// A volunteer group as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VolunteerResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub person: PersonName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub size: VolunteerSize,
    pub size_display: String,
    pub number: Option<i32>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub recipient_id: Option<Uuid>,
    pub notes: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// A volunteer group with the recipient it is assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VolunteerDetailResponse {
    #[serde(flatten)]
    pub volunteer: VolunteerResponse,
    pub assignment: Option<RecipientResponse>,
}

/// Request payload for signing up as a volunteer group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVolunteerRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    pub size: VolunteerSize,

    #[validate(range(min = 1, message = "Number in group must be at least 1"))]
    pub number: Option<i32>,

    #[validate(range(min = 0))]
    pub adults: Option<i32>,

    #[validate(range(min = 0))]
    pub children: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 512, message = "Notes must be at most 512 characters"))]
    pub notes: String,
}

/// Request payload for updating a volunteer registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateVolunteerRequest {
    #[validate(length(min = 1, max = 100))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    pub size: Option<VolunteerSize>,

    #[validate(range(min = 1))]
    pub number: Option<i32>,

    #[validate(range(min = 0))]
    pub adults: Option<i32>,

    #[validate(range(min = 0))]
    pub children: Option<i32>,

    #[validate(length(max = 512))]
    pub notes: Option<String>,
}

/// Staff request to assign a group to a recipient, or clear it with `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    pub recipient_id: Option<Uuid>,
}

impl From<Volunteer> for VolunteerResponse {
    fn from(volunteer: Volunteer) -> Self {
        Self {
            id: volunteer.id,
            person: volunteer.person,
            email: volunteer.email,
            phone: volunteer.phone,
            address: volunteer.address,
            size_display: volunteer.size.label().to_string(),
            size: volunteer.size,
            number: volunteer.number,
            adults: volunteer.adults,
            children: volunteer.children,
            recipient_id: volunteer.recipient_id,
            notes: volunteer.notes,
            created_at: volunteer.created_at,
            updated_at: volunteer.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateVolunteerRequest {
        CreateVolunteerRequest {
            name: "Coach Pat Rivera".to_string(),
            email: "pat@example.com".to_string(),
            phone: "970-555-0199".to_string(),
            address: None,
            size: VolunteerSize::Medium,
            number: Some(8),
            adults: Some(3),
            children: Some(5),
            notes: "Youth soccer team".to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_group_must_have_members() {
        let req = CreateVolunteerRequest {
            number: Some(0),
            ..valid_request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("number"));
    }

    #[test]
    fn test_notes_limit_is_shorter_than_recipients() {
        let req = CreateVolunteerRequest {
            notes: "x".repeat(513),
            ..valid_request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("notes"));
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        let req = UpdateVolunteerRequest {
            phone: Some("nope".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
        assert!(!errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_assignment_accepts_null() {
        let req: AssignmentRequest = serde_json::from_str(r#"{"recipient_id":null}"#).unwrap();
        assert!(req.recipient_id.is_none());
    }
}
