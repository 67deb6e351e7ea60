//! Client for the third-party form relay.
//!
//! One POST per submission. The JSON reply must carry `success: true`;
//! anything else is an error. No retry, no backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};
use tracing::{info, instrument, warn};
use url::Url;

use super::mailto::inquiry_subject;
use crate::actors::traits::ContactRelay;
use crate::error::AppError;
use crate::models::ContactSubmission;

/// Upper bound on one relay exchange. Kept below the chat handle's reply
/// timeout so a hung relay still ends in a notice.
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Body posted to the relay.
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key: Option<&'a str>,
    subject: String,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// The relay's JSON reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReceipt {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP relay client.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: Url,
    access_key: Option<String>,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(endpoint: Url, access_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            access_key,
            timeout: RELAY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for RelayClient {
    #[instrument(skip(self, submission), fields(endpoint = %self.endpoint))]
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayReceipt, AppError> {
        let body = RelayRequest {
            access_key: self.access_key.as_deref(),
            subject: inquiry_subject(&submission.name),
            name: &submission.name,
            email: &submission.email,
            message: &submission.question,
        };

        let request_future = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send();
        let res = timeout(self.timeout, request_future).await??;
        let status = res.status();

        let receipt: RelayReceipt = match timeout(self.timeout, res.json::<RelayReceipt>()).await? {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!("Relay answered {} with an unreadable body: {}", status, e);
                return Err(AppError::Relay(format!("unexpected reply (status {})", status)));
            }
        };

        if !status.is_success() || !receipt.success {
            let reason = receipt
                .message
                .clone()
                .unwrap_or_else(|| format!("status {}", status));
            warn!("Relay rejected submission: {}", reason);
            return Err(AppError::Relay(reason));
        }

        info!("Contact submission relayed");
        Ok(receipt)
    }
}
