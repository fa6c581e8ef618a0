// Business domains
pub mod activities;
