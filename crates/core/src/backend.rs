//! Shaping of Supabase/PostgREST error payloads.
//!
//! Backend calls fail with several payload shapes: PostgREST errors
//! (`code`, `message`, `details`, `hint`), GoTrue auth errors (`error`,
//! `error_description`), a client wrapper `{ "error": { ... } }`, or a bare
//! string. Everything is normalised into [`BackendError`], which always has
//! a displayable message.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Message used when the payload carries nothing displayable.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

/// Normalised backend error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BackendError {}

/// Well-known failure kinds, keyed off PostgREST/Postgres codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    NotFound,
    Duplicate,
    PermissionDenied,
    SessionExpired,
    Other,
}

impl BackendError {
    fn unknown() -> Self {
        Self {
            code: None,
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
            details: None,
            hint: None,
            status: None,
        }
    }

    fn kind(&self) -> Kind {
        match self.code.as_deref() {
            Some("PGRST116") => Kind::NotFound,
            Some("23505") => Kind::Duplicate,
            Some("42501" | "PGRST301") => Kind::PermissionDenied,
            Some("PGRST303") => Kind::SessionExpired,
            _ if self.message.to_lowercase().contains("jwt expired") => Kind::SessionExpired,
            _ => Kind::Other,
        }
    }

    /// Spanish text suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self.kind() {
            Kind::NotFound => "No se encontró el registro solicitado".to_string(),
            Kind::Duplicate => "Ya existe un registro con esos datos".to_string(),
            Kind::PermissionDenied => "No tienes permiso para realizar esta acción".to_string(),
            Kind::SessionExpired => "Tu sesión ha expirado, inicia sesión de nuevo".to_string(),
            Kind::Other => self.message.clone(),
        }
    }

    /// Matching code in the shared error taxonomy.
    pub fn error_code(&self) -> ErrorCode {
        match self.kind() {
            Kind::NotFound => ErrorCode::BackendNotFound,
            Kind::Duplicate => ErrorCode::BackendConflict,
            Kind::PermissionDenied | Kind::SessionExpired => ErrorCode::BackendUnauthorized,
            Kind::Other => ErrorCode::BackendError,
        }
    }
}

/// Normalises any backend error payload. Never fails.
///
/// ```
/// use chapashop_core::backend::shape_backend_error;
/// use serde_json::json;
///
/// let err = shape_backend_error(&json!({
///     "code": "PGRST116",
///     "message": "JSON object requested, multiple (or no) rows returned",
///     "details": "The result contains 0 rows",
///     "hint": null
/// }));
/// assert_eq!(err.code.as_deref(), Some("PGRST116"));
/// assert_eq!(err.user_message(), "No se encontró el registro solicitado");
/// ```
pub fn shape_backend_error(value: &Value) -> BackendError {
    match value {
        Value::String(message) if !message.trim().is_empty() => BackendError {
            message: message.trim().to_string(),
            ..BackendError::unknown()
        },
        Value::Object(map) => {
            // Client wrapper: { "error": { ... } }
            if let Some(inner @ Value::Object(_)) = map.get("error") {
                let mut shaped = shape_backend_error(inner);
                if shaped.status.is_none() {
                    shaped.status = status(value);
                }
                return shaped;
            }

            let text = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
            };

            let code = match map.get("code") {
                Some(Value::String(code)) if !code.is_empty() => Some(code.clone()),
                Some(Value::Number(code)) => Some(code.to_string()),
                _ => text("error_code").or_else(|| text("error")),
            };

            let message = text("message")
                .or_else(|| text("error_description"))
                .or_else(|| text("msg"))
                .or_else(|| text("error"))
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

            BackendError {
                code,
                message,
                details: text("details"),
                hint: text("hint"),
                status: status(value),
            }
        }
        other => {
            tracing::debug!(payload = %other, "Unrecognised backend error payload");
            BackendError::unknown()
        }
    }
}

fn status(value: &Value) -> Option<u16> {
    value
        .get("status")
        .or_else(|| value.get("statusCode"))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
}
