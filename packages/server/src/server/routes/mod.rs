// HTTP routes
pub mod activities;
pub mod health;

pub use activities::*;
pub use health::*;
