use crate::{
    ContactError, ContactFormPayload, ContactResult, DEFAULT_FAILURE_MESSAGE,
    DEFAULT_SUCCESS_MESSAGE,
};

use std::time::Duration;

use log::debug;
use pf_config::ContactConfig;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Successful delivery as reported by the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub status: u16,
    /// Server-supplied message, or the default success text
    pub message: String,
}

/// HTTP client for the contact endpoint
pub struct ContactClient {
    pub endpoint: String,
    pub timeout: Duration,
    client: ReqwestClient,
}

impl ContactClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - Absolute URL receiving the form (e.g., "https://api.example.com/contact")
    /// * `timeout` - Deadline for the whole request, body included
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim().to_string(),
            timeout,
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(&config.endpoint, config.request_timeout())
    }

    /// POST the payload as JSON and classify the response.
    ///
    /// A 2xx status yields `Ok` with the body's `message` (or the default).
    /// Any other status yields `ContactError::Application` with the body's
    /// `error` (or the default). Bodies that are not JSON fall back to the
    /// defaults. Connection failures and deadline expiry are transport errors.
    pub async fn send(&self, payload: &ContactFormPayload) -> ContactResult<ContactReply> {
        debug!("POST {}", self.endpoint);

        let request = async {
            let response = self.client.post(&self.endpoint).json(payload).send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result?,
            Err(_elapsed) => return Err(ContactError::timeout(self.timeout)),
        };

        let body: Option<Value> = serde_json::from_slice(&body).ok();
        debug!(
            "Contact endpoint answered {} ({})",
            status,
            if body.is_some() { "json" } else { "non-json body" }
        );

        if status.is_success() {
            Ok(ContactReply {
                status: status.as_u16(),
                message: body_text(body.as_ref(), "message")
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            })
        } else {
            Err(ContactError::application(
                status.as_u16(),
                body_text(body.as_ref(), "error")
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ))
        }
    }
}

/// Non-empty string field of a JSON object body
fn body_text(body: Option<&Value>, key: &str) -> Option<String> {
    body?
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
