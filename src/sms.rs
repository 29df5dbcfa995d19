use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum SmsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Body of a Telnyx `POST /v2/messages` request.
#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

#[derive(Clone)]
pub struct SmsClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
    api_key: String,
    from_number: String,
}

impl SmsClient {
    pub fn new(base_url: Url, api_key: String, from_number: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url),
            api_key,
            from_number,
        }
    }

    /// Sends one message. Blocks until the provider responds; no retries.
    pub async fn send_message(&self, to: &str, text: &str) -> Result<(), SmsError> {
        let url = self
            .base_url
            .join("v2/messages")
            .expect("messages endpoint url");
        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&OutboundMessage {
                from: &self.from_number,
                to,
                text,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
