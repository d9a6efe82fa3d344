use rust_decimal::Decimal;
use validator::ValidationError;

const PHONE_PUNCTUATION: &[char] = &['+', '-', '(', ')', '.', ' '];

/// Rejects values made only of whitespace.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Accepts 7 to 20 characters of digits and common phone punctuation with
/// at least 7 digits.
pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c));
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    if allowed && (7..=20).contains(&phone.len()) && digits >= 7 {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some("Phone must be a valid phone number".into());
        Err(error)
    }
}

pub(crate) fn validate_hours(hours: &Decimal) -> Result<(), ValidationError> {
    if hours.is_sign_negative() || *hours > Decimal::from(1000) {
        let mut error = ValidationError::new("invalid_hours");
        error.message = Some("Hours must be between 0 and 1000".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(validate_not_blank("Jo").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("(970) 555-0134").is_ok());
        assert!(validate_phone("+1 970.555.0134").is_ok());
        assert!(validate_phone("5550134").is_ok());
        assert!(validate_phone("555-01").is_err());
        assert!(validate_phone("call me maybe").is_err());
        assert!(validate_phone("970-555-0134 ext 5").is_err());
        assert!(validate_phone("123456789012345678901").is_err());
    }

    #[test]
    fn test_hours_range() {
        assert!(validate_hours(&Decimal::new(25, 1)).is_ok());
        assert!(validate_hours(&Decimal::ZERO).is_ok());
        assert!(validate_hours(&Decimal::new(-1, 0)).is_err());
        assert!(validate_hours(&Decimal::new(1001, 0)).is_err());
    }
}
