//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template code already exists: {0}")]
    AlreadyExists(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A WhatsApp message template.
///
/// The `code` is the business identity: unique, case-sensitive, and immutable
/// after creation. The surrogate `id` exists for update/delete operations.
/// Wire names follow the administrative API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Surrogate identifier used by update/delete
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Unique template code (e.g. `BIENVENIDA_BENEFICIARIO`)
    #[serde(rename = "codigo")]
    pub code: String,

    /// Message body with `{{placeholder}}` markers
    #[serde(rename = "plantilla")]
    pub body: String,

    /// Free-text description, no semantic effect
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp, set once
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
