//! Dispatch result types.

use serde::Serialize;
use serde_json::Value;

/// Classification of a failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DispatchErrorKind {
    /// Required gateway credential missing; no HTTP call was attempted
    ConfigurationError,
    /// Malformed input (empty phone, bad payload); caller-correctable
    ValidationError,
    /// Gateway answered with a non-2xx status
    GatewayError,
    /// No response received (timeout, DNS, connection failure)
    NetworkError,
}

/// Structured outcome of a dispatch attempt.
///
/// Every failure path of the dispatch client ends up here; the client never
/// propagates an error across its boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub success: bool,

    /// Opaque gateway payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<DispatchErrorKind>,

    /// HTTP status of a gateway rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl DispatchResult {
    pub fn delivered(provider_response: Value) -> Self {
        Self {
            success: true,
            provider_response: Some(provider_response),
            error_kind: None,
            status_code: None,
            details: None,
        }
    }

    pub fn failure(kind: DispatchErrorKind, details: impl Into<String>) -> Self {
        Self {
            success: false,
            provider_response: None,
            error_kind: Some(kind),
            status_code: None,
            details: Some(Value::String(details.into())),
        }
    }

    pub fn gateway_error(status_code: u16, details: Value) -> Self {
        Self {
            success: false,
            provider_response: None,
            error_kind: Some(DispatchErrorKind::GatewayError),
            status_code: Some(status_code),
            details: Some(details),
        }
    }

    pub fn network_error() -> Self {
        Self::failure(
            DispatchErrorKind::NetworkError,
            "timeout or connectivity failure",
        )
    }

    /// Label for the result classification metric.
    pub fn result_label(&self) -> &'static str {
        match self.error_kind {
            None => "delivered",
            Some(DispatchErrorKind::ConfigurationError) => "configuration_error",
            Some(DispatchErrorKind::ValidationError) => "validation_error",
            Some(DispatchErrorKind::GatewayError) => "gateway_error",
            Some(DispatchErrorKind::NetworkError) => "network_error",
        }
    }
}
