pub mod name_parts;
pub mod person_name;
pub mod recipient;
pub mod session;
pub mod user;
pub mod volunteer;

pub use name_parts::NameParts;
pub use person_name::PersonName;
pub use recipient::{Recipient, RecipientSize};
pub use session::Session;
pub use user::User;
pub use volunteer::{Volunteer, VolunteerSize};
