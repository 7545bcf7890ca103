//! Notification dispatch endpoints.
//!
//! The dispatch pipeline never fails outward: both endpoints answer HTTP 200
//! with a `DispatchResult` body whose `success` flag carries the outcome.
//! Only malformed requests are rejected up front.

use axum::{extract::State, Json};

use crate::dispatch::DispatchResult;
use crate::error::{AppError, Result};
use crate::notifier::Beneficiary;
use crate::server::AppState;

/// POST /notifications/accepted - Notify a beneficiary their case was accepted
#[tracing::instrument(name = "http.notify_accepted", skip(state, beneficiary))]
pub async fn notify_accepted(
    State(state): State<AppState>,
    Json(beneficiary): Json<Beneficiary>,
) -> Result<Json<DispatchResult>> {
    validate(&beneficiary)?;
    Ok(Json(state.notifier.notify_accepted(&beneficiary).await))
}

/// POST /notifications/rejected - Notify a beneficiary their case was rejected
#[tracing::instrument(name = "http.notify_rejected", skip(state, beneficiary))]
pub async fn notify_rejected(
    State(state): State<AppState>,
    Json(beneficiary): Json<Beneficiary>,
) -> Result<Json<DispatchResult>> {
    validate(&beneficiary)?;
    Ok(Json(state.notifier.notify_rejected(&beneficiary).await))
}

fn validate(beneficiary: &Beneficiary) -> Result<()> {
    if beneficiary.full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "nombreCompleto is required".to_string(),
        ));
    }
    Ok(())
}
