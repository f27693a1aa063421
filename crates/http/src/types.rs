//! Common types used by the client

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Authenticated user as returned by the `validar` endpoint.
///
/// `rol` arrives as whatever the backend stores for the role column
/// (usually a numeric id), so it stays loosely typed; `nombre_rol` is the
/// human-readable label when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub nombre: String,
    #[serde(default)]
    pub rol: Option<JsonValue>,
    #[serde(default)]
    pub nombre_rol: Option<String>,
}

impl Usuario {
    /// Display label for the role, preferring `nombre_rol`
    pub fn role_label(&self) -> String {
        if let Some(nombre_rol) = &self.nombre_rol {
            if !nombre_rol.trim().is_empty() {
                return nombre_rol.clone();
            }
        }
        match &self.rol {
            Some(JsonValue::String(rol)) if !rol.trim().is_empty() => rol.clone(),
            Some(JsonValue::Number(rol)) => rol.to_string(),
            _ => "Sin rol".to_string(),
        }
    }
}

/// Response of `GET /api/auth/validar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub usuario: Usuario,
}

/// Body delivered to the beacon logout endpoint on page unload.
///
/// No response is ever read; the payload only identifies the session and
/// where the logout originated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconLogoutPayload {
    pub token: String,
    pub source: String,
}

impl BeaconLogoutPayload {
    /// Payload for the unload path
    pub fn before_unload(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: "beforeunload".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_response_deserializes_backend_shape() {
        let body = json!({
            "usuario": {
                "nombre": "Carlos",
                "rol": 2,
                "nombre_rol": "Coordinador"
            }
        });
        let response: ValidateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.usuario.nombre, "Carlos");
        assert_eq!(response.usuario.role_label(), "Coordinador");
    }

    #[test]
    fn role_label_falls_back_to_raw_role_then_placeholder() {
        let usuario: Usuario = serde_json::from_value(json!({
            "nombre": "Ana",
            "rol": 3
        }))
        .unwrap();
        assert_eq!(usuario.role_label(), "3");

        let usuario: Usuario = serde_json::from_value(json!({ "nombre": "Ana" })).unwrap();
        assert_eq!(usuario.role_label(), "Sin rol");
    }

    #[test]
    fn beacon_payload_marks_the_unload_source() {
        let payload = BeaconLogoutPayload::before_unload("a.b.c");
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body, json!({ "token": "a.b.c", "source": "beforeunload" }));
    }
}
