use anyhow::Result;
use axum::Json;

use crate::errors::{internal_error, AppError};

/// Lowers a service-layer result onto the wire: the value as plain JSON,
/// or the error mapped to an HTTP-aware [`AppError`].
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) if err.downcast_ref::<kube::Error>().is_some() => {
            Err(AppError::K8sApiError(err.to_string()))
        }
        Err(err) => Err(internal_error(err)), // preserves original error string
    }
}
