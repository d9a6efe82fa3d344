pub mod account;
pub mod common;
pub mod recipient;
pub mod volunteer;
