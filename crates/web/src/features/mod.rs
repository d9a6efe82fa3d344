pub mod account;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod recipients;
pub mod volunteers;
