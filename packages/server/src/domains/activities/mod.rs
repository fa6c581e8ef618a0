//! Activities domain - the extracurricular roster and its signup rules
//!
//! Architecture:
//!   HTTP route → RosterStore (lock) → Roster (validation + mutation)

pub mod errors;
pub mod models;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use errors::{RosterError, SeedError};
pub use models::activity::Activity;
pub use models::roster::{Confirmation, Roster};
pub use store::RosterStore;
