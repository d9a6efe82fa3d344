use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_hours, validate_not_blank, validate_phone};
use super::volunteer::VolunteerResponse;
use crate::models::{PersonName, Recipient, RecipientSize};

/// A recipient as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipientResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub person: PersonName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub size: RecipientSize,
    pub size_display: String,
    pub is_dog: bool,
    pub notes: String,
    pub bags: Option<i32>,
    pub hours: Option<Decimal>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// A recipient together with the volunteer groups assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipientDetailResponse {
    #[serde(flatten)]
    pub recipient: RecipientResponse,
    pub assignments: Vec<VolunteerResponse>,
}

/// Dashboard row with assignment totals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipientSummary {
    #[serde(flatten)]
    pub recipient: RecipientResponse,
    pub is_assigned: bool,
    /// Sum of the assigned groups' head counts.
    pub total: Option<i64>,
}

/// Request payload for registering as a recipient
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipientRequest {
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

    pub size: RecipientSize,

    pub is_dog: bool,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: String,
}

/// Request payload for updating a recipient registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipientRequest {
    #[validate(length(min = 1, max = 100))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    pub size: Option<RecipientSize>,

    pub is_dog: Option<bool>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Results recorded by staff after raking
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipientActualsRequest {
    #[validate(range(min = 0, message = "Bags cannot be negative"))]
    pub bags: Option<i32>,

    #[validate(custom(function = "validate_hours"))]
    pub hours: Option<Decimal>,

    #[validate(range(min = 0, message = "Adults cannot be negative"))]
    pub adults: Option<i32>,

    #[validate(range(min = 0, message = "Children cannot be negative"))]
    pub children: Option<i32>,
}

impl From<Recipient> for RecipientResponse {
    fn from(recipient: Recipient) -> Self {
        Self {
            id: recipient.id,
            person: recipient.person,
            email: recipient.email,
            phone: recipient.phone,
            address: recipient.address,
            size_display: recipient.size.label().to_string(),
            size: recipient.size,
            is_dog: recipient.is_dog,
            notes: recipient.notes,
            bags: recipient.bags,
            hours: recipient.hours,
            adults: recipient.adults,
            children: recipient.children,
            created_at: recipient.created_at,
            updated_at: recipient.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateRecipientRequest {
        CreateRecipientRequest {
            name: "Mary \"Mo\" Jones-Lee".to_string(),
            email: "mo@example.com".to_string(),
            phone: "(970) 555-0134".to_string(),
            address: Some("12 Elm St, Eagle, CO".to_string()),
            size: RecipientSize::Medium,
            is_dog: false,
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_name() {
        let req = CreateRecipientRequest {
            name: "   ".to_string(),
            ..valid_request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_request_rejects_bad_contact_details() {
        let req = CreateRecipientRequest {
            email: "not-an-email".to_string(),
            phone: "12".to_string(),
            ..valid_request()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_create_request_rejects_long_notes() {
        let req = CreateRecipientRequest {
            notes: "x".repeat(2001),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_notes_default_to_empty() {
        let req: CreateRecipientRequest = serde_json::from_str(
            r#"{"name":"Ann Lee","email":"ann@example.com","phone":"555-0100 12","size":"small","is_dog":true}"#,
        )
        .unwrap();
        assert_eq!(req.notes, "");
        assert_eq!(req.size, RecipientSize::Small);
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateRecipientRequest::default().validate().is_ok());
    }

    #[test]
    fn test_actuals_reject_negative_counts() {
        let req = RecipientActualsRequest {
            bags: Some(-1),
            hours: Some(Decimal::new(-5, 1)),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("bags"));
        assert!(fields.contains_key("hours"));
    }
}
