//! # cw-client
//!
//! The client half of the relay: pushes text to `/copy` and pulls it
//! from `/paste`, password header included.

use log::debug;
use thiserror::Error;

use cw_core::CopyRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status; the body carries
    /// its plain-text message, e.g. `invalid password`.
    #[error("error: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    password: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>, password: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            password: password.into(),
        }
    }

    /// POSTs `text` to the remote clipboard. Returns the server's
    /// confirmation body.
    pub async fn copy(&self, text: &str) -> Result<String, ClientError> {
        let url = format!("{}/copy", self.base_url);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .header("password", &self.password)
            .json(&CopyRequest {
                text: text.to_owned(),
            })
            .send()
            .await?;
        Self::successful_body(response).await
    }

    /// GETs the remote clipboard text.
    pub async fn paste(&self) -> Result<String, ClientError> {
        let url = format!("{}/paste", self.base_url);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header("password", &self.password)
            .send()
            .await?;
        Self::successful_body(response).await
    }

    async fn successful_body(response: reqwest::Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(body)
    }
}
