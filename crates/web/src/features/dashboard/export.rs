use storage::models::{Recipient, Volunteer};

const HEADER: [&str; 9] = [
    "Volunteer",
    "Phone",
    "Number",
    "Recipient",
    "Address",
    "Phone",
    "Email",
    "Dog",
    "Size",
];

fn bool_cell(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Render the volunteer roster as CSV, one row per group.
///
/// Groups without an assignment keep their own columns and leave the
/// recipient columns empty.
pub fn roster_csv(roster: &[(Volunteer, Option<Recipient>)]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for (volunteer, recipient) in roster {
        let number = volunteer.number.map(|n| n.to_string()).unwrap_or_default();
        let mut row = vec![
            volunteer.person.name.as_str(),
            volunteer.phone.as_deref().unwrap_or_default(),
            number.as_str(),
        ];

        match recipient {
            Some(r) => row.extend([
                r.person.name.as_str(),
                r.address.as_deref().unwrap_or_default(),
                r.phone.as_deref().unwrap_or_default(),
                r.email.as_deref().unwrap_or_default(),
                bool_cell(r.is_dog),
                r.size.label(),
            ]),
            None => row.extend(["", "", "", "", "", ""]),
        }

        writer.write_record(&row)?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.error().to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::handout::tests::{recipient, volunteer};

    fn lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_header_only_for_empty_roster() {
        let out = lines(roster_csv(&[]).unwrap());
        assert_eq!(
            out,
            vec!["Volunteer,Phone,Number,Recipient,Address,Phone,Email,Dog,Size"]
        );
    }

    #[test]
    fn test_assigned_row() {
        let v = volunteer("Troop 42");
        let r = recipient("Mrs. Jane Smith", "12 Elm St");
        let out = lines(roster_csv(&[(v, Some(r))]).unwrap());

        assert_eq!(out.len(), 2);
        assert_eq!(
            out[1],
            "Troop 42,555-123-4567,6,Mrs. Jane Smith,12 Elm St,555-987-6543,jane@example.com,True,Medium (16-30 bags)"
        );
    }

    #[test]
    fn test_unassigned_row_has_empty_recipient_cells() {
        let out = lines(roster_csv(&[(volunteer("Troop 42"), None)]).unwrap());
        assert_eq!(out[1], "Troop 42,555-123-4567,6,,,,,,");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let v = volunteer("Smith, John");
        let out = lines(roster_csv(&[(v, None)]).unwrap());
        assert!(out[1].starts_with("\"Smith, John\","));
    }
}
