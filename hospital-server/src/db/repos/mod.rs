//! Repository implementations for database access
//!
//! Repositories borrow the pool, acquire one connection per operation,
//! and report not-found through their return values rather than errors.

pub mod pacientes;

pub use pacientes::{DbError, PacienteRepo};
