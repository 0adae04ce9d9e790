// src/auth/mod.rs

pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;

pub use extractors::{AdminUser, AuthedUser};
pub use routes::auth_routes;
