//! Patient repository
//!
//! Each operation checks out one pooled connection, runs a single
//! parameterized statement, and returns mapped rows or a row-count
//! outcome. Not-found is reported as `None`/`false`, never as an error.

use sqlx::PgPool;

use crate::db::pool;
use crate::models::{Paciente, PacienteInput, UpdatePaciente};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Patient repository
pub struct PacienteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PacienteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every patient, in database default order.
    pub async fn list(&self) -> Result<Vec<Paciente>, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let pacientes: Vec<Paciente> = sqlx::query_as("SELECT * FROM paciente")
            .fetch_all(&mut *conn)
            .await?;

        Ok(pacientes)
    }

    /// Look up a single patient by primary key.
    pub async fn get(&self, id: i64) -> Result<Option<Paciente>, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let paciente: Option<Paciente> = sqlx::query_as("SELECT * FROM paciente WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(paciente)
    }

    /// Insert a new patient and return the stored row with its generated
    /// id. New rows are always active, whatever the request carried.
    pub async fn create(&self, datos: &PacienteInput) -> Result<Paciente, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let paciente: Paciente = sqlx::query_as(
            r#"
            INSERT INTO paciente (nombre, correo, edad, direccion, cedula, activo)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING *
            "#,
        )
        .bind(&datos.nombre)
        .bind(&datos.correo)
        .bind(datos.edad)
        .bind(&datos.direccion)
        .bind(&datos.cedula)
        .fetch_one(&mut *conn)
        .await?;

        Ok(paciente)
    }

    /// Update the five mutable fields. `id` and `activo` are never
    /// touched here; the estado operation owns `activo`.
    ///
    /// Returns false when no row matched the id. Absent payload fields
    /// bind SQL NULL and surface as a database error on NOT NULL columns.
    pub async fn update(&self, id: i64, cambios: &UpdatePaciente) -> Result<bool, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let result = sqlx::query(
            r#"
            UPDATE paciente
            SET nombre = $2, correo = $3, edad = $4, direccion = $5, cedula = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&cambios.nombre)
        .bind(&cambios.correo)
        .bind(cambios.edad)
        .bind(&cambios.direccion)
        .bind(&cambios.cedula)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Activate or deactivate a patient.
    pub async fn set_estado(&self, id: i64, activo: bool) -> Result<bool, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let result = sqlx::query("UPDATE paciente SET activo = $2 WHERE id = $1")
            .bind(id)
            .bind(activo)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove the row entirely; there is no soft delete.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut conn = pool::acquire(self.pool).await?;

        let result = sqlx::query("DELETE FROM paciente WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
