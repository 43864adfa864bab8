//! hospital-server: HTTP backend for hospital patient records
//!
//! Exposes the patient endpoints the hospital frontend consumes: listing,
//! registration, editing, activation state, and deletion, backed by a
//! single PostgreSQL `paciente` table.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, AppState, ServerConfig};
pub use models::Paciente;
