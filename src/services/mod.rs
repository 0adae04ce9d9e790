// src/services/mod.rs
//
// Shared services module containing collaborators used across domain modules

pub mod groq;

pub use groq::GroqService;
