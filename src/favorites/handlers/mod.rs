// src/favorites/handlers/mod.rs

pub mod players;
pub mod teams;

pub use players::*;
pub use teams::*;
