// HTTP server setup (Axum)
pub mod app;
pub mod error;
pub mod routes;
pub mod shutdown;
pub mod static_files;

pub use app::*;
