pub mod recipient;
pub mod session;
pub mod user;
pub mod volunteer;

use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

use crate::models::PersonName;

/// Binds the ten name columns in table order, starting at the next
/// placeholder.
fn bind_person<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    person: &'q PersonName,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(person.name.as_str())
        .bind(person.formal_name.as_str())
        .bind(person.familiar_name.as_str())
        .bind(person.greeting_name.as_str())
        .bind(person.prefix.as_str())
        .bind(person.first_name.as_str())
        .bind(person.middle_name.as_str())
        .bind(person.last_name.as_str())
        .bind(person.nick_name.as_str())
        .bind(person.suffix.as_str())
}
