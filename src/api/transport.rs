use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};

use super::error::TransportError;

/// Status code and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// HTTP seam between the fetcher and the network.
///
/// Implementations only report what happened on the wire; interpreting
/// status codes is the fetcher's job.
pub trait Transport: Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;

    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// `reqwest` backed transport with a per-request timeout
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    async fn complete(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse::new(status, body))
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        Self::complete(response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, TransportError> {
        let response = self.client.post(url).json(body).send().await?;
        Self::complete(response).await
    }
}

#[cfg(test)]
pub mod scripted {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    /// In-memory transport answering from a table of canned replies.
    /// Unscripted URLs answer 404.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Arc<Mutex<HashMap<(&'static str, String), Result<RawResponse, TransportError>>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on_get(self, url: &str, reply: Result<RawResponse, TransportError>) -> Self {
            self.replies.lock().unwrap().insert(("GET", url.to_string()), reply);
            self
        }

        pub fn on_post(self, url: &str, reply: Result<RawResponse, TransportError>) -> Self {
            self.replies.lock().unwrap().insert(("POST", url.to_string()), reply);
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn answer(
            &self,
            method: &'static str,
            url: &str,
            body: Option<serde_json::Value>,
        ) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                body,
            });
            self.replies
                .lock()
                .unwrap()
                .get(&(method, url.to_string()))
                .cloned()
                .unwrap_or_else(|| Ok(RawResponse::new(404, "404 page not found")))
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
            self.answer("GET", url, None)
        }

        async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, TransportError> {
            self.answer("POST", url, Some(body.clone()))
        }
    }
}
