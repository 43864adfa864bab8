//! Patient record models
//!
//! Struct field names double as the wire contract and the `paciente` column
//! names consumed by the existing frontend, so they stay in Spanish. Do not
//! rename them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::ValidationError;

/// A persisted patient row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Paciente {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub edad: i32,
    pub direccion: String,
    pub cedula: String,
    pub activo: bool,
}

/// Incoming registration payload; every field optional until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaciente {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub edad: Option<i32>,
    pub direccion: Option<String>,
    pub cedula: Option<String>,
    /// Accepted for wire-shape compatibility; new patients are always
    /// registered active, whatever the client sent.
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Validated data for an insert. No `id` (server-generated) and no
/// `activo` (forced true on creation).
#[derive(Debug, Clone, PartialEq)]
pub struct PacienteInput {
    pub nombre: String,
    pub correo: String,
    pub edad: i32,
    pub direccion: String,
    pub cedula: String,
}

impl CreatePaciente {
    /// Check required fields before any store access.
    pub fn validate(self) -> Result<PacienteInput, ValidationError> {
        let nombre = self
            .nombre
            .ok_or(ValidationError::Missing { field: "nombre" })?;
        let correo = self
            .correo
            .ok_or(ValidationError::Missing { field: "correo" })?;
        let direccion = self
            .direccion
            .ok_or(ValidationError::Missing { field: "direccion" })?;
        let cedula = self
            .cedula
            .ok_or(ValidationError::Missing { field: "cedula" })?;
        let edad = self.edad.ok_or(ValidationError::Missing { field: "edad" })?;
        if edad <= 0 {
            return Err(ValidationError::NotPositive { field: "edad" });
        }

        Ok(PacienteInput {
            nombre,
            correo,
            edad,
            direccion,
            cedula,
        })
    }
}

/// Incoming edit payload: the full record shape with an optional id.
///
/// `activo` rides along in the wire shape but is never written by the
/// general update; only the estado operation changes it. Serialize is
/// derived because the edit endpoint echoes the request record back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePaciente {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub edad: Option<i32>,
    pub direccion: Option<String>,
    pub cedula: Option<String>,
    #[serde(default)]
    pub activo: bool,
}

/// Payload for the activate/deactivate operation
#[derive(Debug, Clone, Deserialize)]
pub struct EstadoUpdate {
    pub id: i64,
    #[serde(default)]
    pub activo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WIRE_FIELDS: [&str; 7] = [
        "id",
        "nombre",
        "correo",
        "edad",
        "direccion",
        "cedula",
        "activo",
    ];

    fn sample() -> Paciente {
        Paciente {
            id: 1,
            nombre: "Ana".into(),
            correo: "a@x.com".into(),
            edad: 30,
            direccion: "Calle 1".into(),
            cedula: "0102030405".into(),
            activo: true,
        }
    }

    #[test]
    fn paciente_serializes_all_wire_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for field in WIRE_FIELDS {
            assert!(obj.contains_key(field), "missing wire field '{}'", field);
        }
        assert_eq!(obj.len(), WIRE_FIELDS.len());
    }

    #[test]
    fn paciente_round_trips() {
        let p = sample();
        let parsed: Paciente =
            serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn create_validates_complete_payload() {
        let req: CreatePaciente = serde_json::from_value(json!({
            "nombre": "Ana",
            "correo": "a@x.com",
            "edad": 30,
            "direccion": "Calle 1",
            "cedula": "0102030405"
        }))
        .unwrap();

        let datos = req.validate().unwrap();
        assert_eq!(datos.nombre, "Ana");
        assert_eq!(datos.edad, 30);
    }

    #[test]
    fn create_rejects_each_missing_field() {
        let complete = json!({
            "nombre": "Ana",
            "correo": "a@x.com",
            "edad": 30,
            "direccion": "Calle 1",
            "cedula": "0102030405"
        });

        for field in ["nombre", "correo", "edad", "direccion", "cedula"] {
            let mut partial = complete.clone();
            partial.as_object_mut().unwrap().remove(field);
            let req: CreatePaciente = serde_json::from_value(partial).unwrap();
            assert_eq!(
                req.validate().unwrap_err(),
                ValidationError::Missing { field },
                "expected '{}' to be required",
                field
            );
        }
    }

    #[test]
    fn create_rejects_non_positive_edad() {
        for edad in [0, -1] {
            let req = CreatePaciente {
                nombre: Some("Ana".into()),
                correo: Some("a@x.com".into()),
                edad: Some(edad),
                direccion: Some("Calle 1".into()),
                cedula: Some("0102030405".into()),
                activo: None,
            };
            assert_eq!(
                req.validate().unwrap_err(),
                ValidationError::NotPositive { field: "edad" }
            );
        }
    }

    #[test]
    fn create_ignores_supplied_activo() {
        let req: CreatePaciente = serde_json::from_value(json!({
            "nombre": "Ana",
            "correo": "a@x.com",
            "edad": 30,
            "direccion": "Calle 1",
            "cedula": "0102030405",
            "activo": false
        }))
        .unwrap();

        // Validation succeeds and the insert data carries no activo at all;
        // the store hardcodes it to true.
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_echo_keeps_full_wire_shape() {
        let req: UpdatePaciente = serde_json::from_value(json!({
            "id": 7,
            "nombre": "Ana"
        }))
        .unwrap();
        assert!(!req.activo);

        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        for field in WIRE_FIELDS {
            assert!(obj.contains_key(field), "echo lost wire field '{}'", field);
        }
    }

    #[test]
    fn estado_requires_id() {
        assert!(serde_json::from_value::<EstadoUpdate>(json!({ "activo": true })).is_err());

        let req: EstadoUpdate = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(!req.activo);
    }
}
