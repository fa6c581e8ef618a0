pub mod activity;
pub mod roster;
