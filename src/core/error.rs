//! Typed error handling for resource operations
//!
//! Every failure a service can report is a [`ServiceError`] variant, so callers
//! can match on the specific kind instead of inspecting strings.
//!
//! # Example
//!
//! ```rust,ignore
//! use resources::prelude::*;
//!
//! match registry.orders.get(&id) {
//!     Ok(order) => println!("total: {}", order.total_amount),
//!     Err(ServiceError::NotFound { id, .. }) => println!("order {} not found", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Result alias used throughout the services
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Errors returned by stores and services
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The identifier is absent from the store
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: Uuid },

    /// A create supplied an identifier that is already stored
    #[error("{entity_type} with id '{id}' already exists")]
    Conflict { entity_type: String, id: Uuid },

    /// An order line item names a product that does not exist
    #[error("Unknown product_id: {product_id}")]
    InvalidReference { product_id: Uuid },

    /// The store itself failed (poisoned lock)
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    pub fn not_found(entity_type: impl Into<String>, id: Uuid) -> Self {
        ServiceError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn conflict(entity_type: impl Into<String>, id: Uuid) -> Self {
        ServiceError::Conflict {
            entity_type: entity_type.into(),
            id,
        }
    }

    /// HTTP status the transport layer should answer with
    ///
    /// Conflicts map to 400 rather than 409 to stay wire-compatible with the
    /// existing clients of this API.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Conflict { .. } => StatusCode::BAD_REQUEST,
            ServiceError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ServiceError::Conflict { .. } => "ENTITY_ALREADY_EXISTS",
            ServiceError::InvalidReference { .. } => "INVALID_REFERENCE",
            ServiceError::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::NotFound { entity_type, id }
            | ServiceError::Conflict { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id.to_string()
            })),
            ServiceError::InvalidReference { product_id } => Some(serde_json::json!({
                "product_id": product_id.to_string()
            })),
            ServiceError::Storage { .. } => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
