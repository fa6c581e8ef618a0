// Extracurricular Activity Roster - API Core
//
// This crate holds the in-memory activity roster and the HTTP surface that
// lists activities and signs participants up or removes them.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
