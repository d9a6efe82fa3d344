use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::NameParts;

/// The name columns shared by every person-like record.
///
/// Only the raw `name` is user input. Everything else is derived from it by
/// [`PersonName::from_full_name`] and written in the same statement, so the
/// stored parts can never go stale relative to the raw name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PersonName {
    pub name: String,
    pub formal_name: String,
    pub familiar_name: String,
    pub greeting_name: String,
    pub prefix: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nick_name: String,
    pub suffix: String,
}

impl PersonName {
    /// Parses `name` and fills in every derived column.
    pub fn from_full_name(name: &str) -> Self {
        let parts = NameParts::parse(name);

        Self {
            name: name.to_string(),
            formal_name: parts.formal_name(),
            familiar_name: parts.familiar_name(),
            greeting_name: parts.greeting_name(),
            prefix: parts.prefix,
            first_name: parts.first,
            middle_name: parts.middle,
            last_name: parts.last,
            nick_name: parts.nickname,
            suffix: parts.suffix,
        }
    }

    /// Re-derives every column whenever a name is supplied, even an
    /// unchanged one, so rows written by an older parser are refreshed.
    pub fn renamed(&self, name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::from_full_name(name),
            None => self.clone(),
        }
    }

    pub fn parts(&self) -> NameParts {
        NameParts {
            prefix: self.prefix.clone(),
            first: self.first_name.clone(),
            middle: self.middle_name.clone(),
            last: self.last_name.clone(),
            nickname: self.nick_name.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_full_name_fills_every_column() {
        let person = PersonName::from_full_name("Dr. John Q. Smith Jr.");
        assert_eq!(person.name, "Dr. John Q. Smith Jr.");
        assert_eq!(person.prefix, "Dr.");
        assert_eq!(person.first_name, "John");
        assert_eq!(person.middle_name, "Q.");
        assert_eq!(person.last_name, "Smith");
        assert_eq!(person.nick_name, "");
        assert_eq!(person.suffix, "Jr.");
        assert_eq!(person.formal_name, "Dr. John Smith Jr.");
        assert_eq!(person.greeting_name, "John");
        assert_eq!(person.familiar_name, "John Smith");
    }

    #[test]
    fn test_derived_columns_match_parts() {
        let person = PersonName::from_full_name("Mary \"Mo\" Jones-Lee");
        let parts = person.parts();
        assert_eq!(person.formal_name, parts.formal_name());
        assert_eq!(person.greeting_name, "Mo");
        assert_eq!(person.familiar_name, "Mo Jones-Lee");
    }

    #[test]
    fn test_same_name_derives_identically() {
        let first = PersonName::from_full_name("Rev. Ana María de la Vega, PhD");
        let second = PersonName::from_full_name("Rev. Ana María de la Vega, PhD");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rename_overwrites_all_derived_columns() {
        let before = PersonName::from_full_name("Dr. John Q. Smith Jr.");
        let after = before.renamed(Some("Madonna"));

        assert_eq!(after, PersonName::from_full_name("Madonna"));
        assert_eq!(after.prefix, "");
        assert_eq!(after.suffix, "");
        assert_eq!(after.middle_name, "");
        assert_eq!(after.familiar_name, "Madonna");
    }

    #[test]
    fn test_rename_without_new_name_keeps_columns() {
        let before = PersonName::from_full_name("Mary \"Mo\" Jones-Lee");
        assert_eq!(before.renamed(None), before);
        assert_eq!(before.renamed(Some("Mary \"Mo\" Jones-Lee")), before);
    }

    #[test]
    fn test_resaving_same_name_refreshes_stale_columns() {
        let mut stale = PersonName::from_full_name("Dr.");
        stale.prefix = String::new();
        stale.first_name = "Dr.".to_string();
        stale.formal_name = "Dr.".to_string();
        stale.greeting_name = "Dr.".to_string();
        stale.familiar_name = "Dr.".to_string();

        let refreshed = stale.renamed(Some("Dr."));

        assert_eq!(refreshed, PersonName::from_full_name("Dr."));
        assert_eq!(refreshed.prefix, "Dr.");
        assert_eq!(refreshed.first_name, "");
        assert_eq!(refreshed.greeting_name, "");
    }
}
