//! Domain models with validation at construction
//!
//! Incoming payloads are validated before they reach the store. Invalid
//! input returns ValidationError, not panic.

pub mod paciente;
pub mod validation;

pub use paciente::{CreatePaciente, EstadoUpdate, Paciente, PacienteInput, UpdatePaciente};
pub use validation::ValidationError;
