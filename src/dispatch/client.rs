//! WhatsApp gateway client.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::WhatsAppConfig;
use crate::metrics;
use crate::phone;
use crate::renderer::{CaseOutcome, MessageRenderer};

use super::types::{DispatchErrorKind, DispatchResult};

/// Gateway send payload: `{number, text, from?}`.
#[derive(Debug, Serialize)]
struct SendPayload {
    number: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
}

/// Sends case notifications through the WhatsApp gateway.
///
/// All collaborators are injected at construction; the client holds no global
/// state. `send` classifies every outcome into a [`DispatchResult`] and never
/// returns an error.
pub struct WhatsAppClient {
    http: Client,
    config: WhatsAppConfig,
    renderer: MessageRenderer,
    timeout: Duration,
}

impl WhatsAppClient {
    pub fn new(config: WhatsAppConfig, renderer: MessageRenderer) -> Self {
        let timeout = Duration::from_secs(config.timeout_seconds);
        Self {
            http: Client::new(),
            config,
            renderer,
            timeout,
        }
    }

    /// Render and deliver a notification. Never fails outward.
    #[tracing::instrument(
        name = "dispatch.send",
        skip_all,
        fields(outcome = outcome.as_code())
    )]
    pub async fn send(&self, name: &str, outcome: CaseOutcome, phone_raw: &str) -> DispatchResult {
        metrics::DISPATCH_ATTEMPTS_TOTAL
            .with_label_values(&[outcome.as_code()])
            .inc();

        let timer = metrics::DISPATCH_DURATION_SECONDS.start_timer();
        let result = self.dispatch(name, outcome, phone_raw).await;
        timer.observe_duration();

        metrics::DISPATCH_RESULTS_TOTAL
            .with_label_values(&[outcome.as_code(), result.result_label()])
            .inc();

        result
    }

    async fn dispatch(&self, name: &str, outcome: CaseOutcome, phone_raw: &str) -> DispatchResult {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::error!("WhatsApp API key is not configured");
            return DispatchResult::failure(
                DispatchErrorKind::ConfigurationError,
                "WhatsApp API key is not configured",
            );
        };

        let number = match phone::normalize(phone_raw) {
            Ok(number) => number,
            Err(e) => {
                return DispatchResult::failure(DispatchErrorKind::ValidationError, e.to_string())
            }
        };

        let number = if self.config.test_mode {
            tracing::warn!(
                recipient = %phone::mask(&number),
                override_number = %phone::mask(&self.config.test_number),
                "Test mode enabled, redirecting dispatch to the configured test number"
            );
            self.config.test_number.clone()
        } else {
            number
        };

        let text = self.renderer.render(name, outcome);
        let payload = SendPayload {
            number,
            text,
            from: self.config.from_number.clone(),
        };

        tracing::info!(recipient = %phone::mask(&payload.number), "Dispatching WhatsApp notification");

        let response = self
            .http
            .post(&self.config.api_url)
            .header("apikey", api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let body = read_body(resp).await;

                if status.is_success() {
                    tracing::info!(status = status.as_u16(), "WhatsApp notification delivered");
                    DispatchResult::delivered(body)
                } else {
                    tracing::error!(
                        status = status.as_u16(),
                        body = %body,
                        "Gateway rejected the dispatch"
                    );
                    DispatchResult::gateway_error(status.as_u16(), body)
                }
            }
            Err(e) if e.is_builder() => {
                tracing::error!(error = %e, "Failed to build gateway request");
                DispatchResult::failure(DispatchErrorKind::ValidationError, e.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "No response from gateway");
                DispatchResult::network_error()
            }
        }
    }
}

/// Read the response body as JSON when possible, falling back to raw text.
async fn read_body(resp: reqwest::Response) -> Value {
    let text = resp.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
