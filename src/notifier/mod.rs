//! Outcome-specific notification entry points.

use serde::Deserialize;

use crate::dispatch::{DispatchResult, WhatsAppClient};
use crate::renderer::CaseOutcome;

/// Identity data of the beneficiary being notified.
#[derive(Debug, Clone, Deserialize)]
pub struct Beneficiary {
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

/// Thin orchestrator over the dispatch client.
///
/// Exists so callers get outcome-specific entry points instead of passing raw
/// outcome codes around.
pub struct CaseNotifier {
    client: WhatsAppClient,
}

impl CaseNotifier {
    pub fn new(client: WhatsAppClient) -> Self {
        Self { client }
    }

    pub async fn notify_accepted(&self, beneficiary: &Beneficiary) -> DispatchResult {
        self.client
            .send(
                &beneficiary.full_name,
                CaseOutcome::Accepted,
                &beneficiary.phone,
            )
            .await
    }

    pub async fn notify_rejected(&self, beneficiary: &Beneficiary) -> DispatchResult {
        self.client
            .send(
                &beneficiary.full_name,
                CaseOutcome::Rejected,
                &beneficiary.phone,
            )
            .await
    }
}
