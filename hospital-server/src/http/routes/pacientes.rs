//! Patient endpoints
//!
//! The five operations of the hospital frontend contract: list, create,
//! edit, estado (activate/deactivate), and delete.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::db::PacienteRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreatePaciente, EstadoUpdate, Paciente, UpdatePaciente, ValidationError};

/// GET /pacientes - list every patient
async fn list_pacientes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Paciente>>, ApiError> {
    let pacientes = PacienteRepo::new(&state.pool).list().await?;
    Ok(Json(pacientes))
}

/// POST /pacientes - register a new patient
///
/// Required fields are checked before the store is touched; the stored
/// row comes back with its generated id and `activo` forced true.
async fn create_paciente(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePaciente>,
) -> Result<Json<Paciente>, ApiError> {
    let datos = req.validate()?;
    let creado = PacienteRepo::new(&state.pool).create(&datos).await?;
    Ok(Json(creado))
}

/// POST /pacientes/editar - update an existing patient
///
/// Only the id is validated here; other fields go to the store as-is and
/// constraint violations surface as database errors. Echoes the request
/// record back on success. `activo` is never written by this path.
async fn update_paciente(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePaciente>,
) -> Result<Json<UpdatePaciente>, ApiError> {
    let id = req.id.ok_or(ValidationError::Missing { field: "id" })?;

    let actualizado = PacienteRepo::new(&state.pool).update(id, &req).await?;
    if !actualizado {
        return Err(ApiError::NotFound);
    }

    Ok(Json(req))
}

/// POST /pacientes/estado - activate or deactivate a patient
async fn set_estado(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EstadoUpdate>,
) -> Result<&'static str, ApiError> {
    let cambiado = PacienteRepo::new(&state.pool)
        .set_estado(req.id, req.activo)
        .await?;
    if !cambiado {
        return Err(ApiError::NotFound);
    }

    Ok("Estado actualizado")
}

/// DELETE /pacientes/{id} - remove a patient
async fn delete_paciente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let eliminado = PacienteRepo::new(&state.pool).delete(id).await?;
    if !eliminado {
        return Err(ApiError::NotFound);
    }

    Ok("Paciente eliminado correctamente")
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pacientes", get(list_pacientes).post(create_paciente))
        .route("/pacientes/editar", post(update_paciente))
        .route("/pacientes/estado", post(set_estado))
        .route("/pacientes/{id}", delete(delete_paciente))
}
