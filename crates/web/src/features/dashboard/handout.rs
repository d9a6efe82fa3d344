use reqwest::Url;
use storage::models::{Recipient, Volunteer};

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

const STYLE: &str = "body { font-family: sans-serif; margin: 10mm; }\n\
    .handout { page-break-after: always; }\n\
    .handout:last-child { page-break-after: auto; }\n\
    dt { font-weight: bold; }";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Google Maps search link for an address
pub fn map_url(address: &str) -> Option<Url> {
    Url::parse_with_params(MAPS_SEARCH, &[("api", "1"), ("query", address)]).ok()
}

fn entry(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<dt>{}</dt><dd>{}</dd>\n",
        label,
        escape_html(value)
    ));
}

/// One printable handout section for a volunteer group.
pub fn render_handout(volunteer: &Volunteer, recipient: Option<&Recipient>) -> String {
    let mut out = String::from("<section class=\"handout\">\n");
    out.push_str(&format!(
        "<h1>Rake Up</h1>\n<p>Dear {},</p>\n",
        escape_html(&volunteer.person.greeting_name)
    ));

    let Some(recipient) = recipient else {
        out.push_str("<p>Your group has not been assigned a yard yet.</p>\n</section>\n");
        return out;
    };

    out.push_str("<p>Thank you for raking! Your group is assigned to:</p>\n<dl>\n");
    entry(&mut out, "Name", &recipient.person.formal_name);

    if let Some(address) = recipient.address.as_deref() {
        entry(&mut out, "Address", address);
        if let Some(url) = map_url(address) {
            out.push_str(&format!(
                "<dd><a href=\"{}\">Map</a></dd>\n",
                escape_html(url.as_str())
            ));
        }
    }
    if let Some(phone) = recipient.phone.as_deref() {
        entry(&mut out, "Phone", phone);
    }
    entry(&mut out, "Yard", recipient.size.label());
    entry(&mut out, "Dog", if recipient.is_dog { "Yes" } else { "No" });
    if !recipient.notes.is_empty() {
        entry(&mut out, "Notes", &recipient.notes);
    }
    out.push_str("</dl>\n");

    out.push_str(&format!(
        "<p>Please introduce yourselves to {} when you arrive.</p>\n</section>\n",
        escape_html(&recipient.person.familiar_name)
    ));
    out
}

/// Wrap handout sections in a printable document, one page each.
pub fn render_document(sections: &[String]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Rake Up Handout</title>\n<style>\n",
    );
    out.push_str(STYLE);
    out.push_str("\n</style>\n</head>\n<body>\n");
    for section in sections {
        out.push_str(section);
    }
    out.push_str("</body>\n</html>\n");
    out
}
