pub mod export;
pub mod handlers;
pub mod handout;
pub mod routes;
pub mod services;
