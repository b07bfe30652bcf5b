// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the selection notification port.
//!
//! Posts each committed selection as a JSON body to a configured endpoint.
//! Delivery runs on the Tokio runtime so a slow or failing server can
//! never stall gesture handling; outcomes are recorded to the shared
//! [`EventLog`].

use crate::application::port::SelectionNotifier;
use crate::diagnostics::{EventLog, NotifierEvent};
use crate::domain::tariff::Tariff;
use crate::error::{Error, Result};
use serde::Serialize;

/// Wire payload for one selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionPayload<'a> {
    tariff_id: &'a str,
    speed: u32,
}

/// Serializes the request body for a committed tariff.
fn payload_json(tariff: &Tariff) -> std::result::Result<String, String> {
    serde_json::to_string(&SelectionPayload {
        tariff_id: &tariff.id,
        speed: tariff.speed,
    })
    .map_err(|e| e.to_string())
}

/// Posts one selection; an error string describes either a transport
/// failure or a non-success status.
async fn send_selection(
    client: &reqwest::Client,
    endpoint: &str,
    tariff: &Tariff,
) -> std::result::Result<(), String> {
    let body = payload_json(tariff)?;
    let response = client
        .post(endpoint)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("status {}", response.status()))
    }
}

/// Fire-and-forget HTTP notifier.
pub struct HttpSelectionNotifier {
    client: reqwest::Client,
    endpoint: String,
    log: EventLog,
}

impl HttpSelectionNotifier {
    /// Builds a notifier posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Notifier`] when the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: impl Into<String>, log: EventLog) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::Notifier(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            log,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Delivers one selection and records the outcome. Exposed separately
    /// from [`SelectionNotifier::notify`] so callers and tests can await
    /// completion.
    pub async fn deliver(&self, tariff: &Tariff) {
        let outcome = send_selection(&self.client, &self.endpoint, tariff).await;
        self.log.record(match outcome {
            Ok(()) => NotifierEvent::Sent {
                tariff_id: tariff.id.clone(),
            },
            Err(reason) => NotifierEvent::Failed {
                tariff_id: tariff.id.clone(),
                reason,
            },
        });
    }
}

impl SelectionNotifier for HttpSelectionNotifier {
    fn notify(&self, tariff: &Tariff) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let log = self.log.clone();
        let tariff = tariff.clone();

        tokio::spawn(async move {
            let outcome = send_selection(&client, &endpoint, &tariff).await;
            log.record(match outcome {
                Ok(()) => NotifierEvent::Sent {
                    tariff_id: tariff.id.clone(),
                },
                Err(reason) => NotifierEvent::Failed {
                    tariff_id: tariff.id,
                    reason,
                },
            });
        });
    }
}
