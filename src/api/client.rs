use chrono::Local;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{Health, NewStrategy};
use crate::ui::DashboardData;
use super::endpoint::Endpoint;
use super::error::{ApiError, TransportError};
use super::notice::Notice;
use super::transport::Transport;

const HTTP_OK: u16 = 200;
const HTTP_CREATED: u16 = 201;

/// Result of a `POST /strategies`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created,
    /// Backend answered with something other than 201; body is kept verbatim
    Rejected { status: u16, body: String },
    /// Request never completed
    Failed(String),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Created => Notice::success("Strategy added successfully!"),
            SubmitOutcome::Rejected { body, .. } => {
                Notice::error(format!("Failed to add strategy: {}", body.trim_end()))
            }
            SubmitOutcome::Failed(cause) => Notice::error(format!("Error: {}", cause)),
        }
    }
}

/// Data fetcher for the basis trading backend.
///
/// Read operations never fail outward: every error becomes exactly one
/// error [`Notice`] and the resource degrades to "no data".
pub struct ApiClient<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, ApiError> {
        let url = endpoint.url(&self.base_url);
        debug!(%url, "GET");

        let reply = self
            .transport
            .get(&url)
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        if reply.status != HTTP_OK {
            return Err(ApiError::Status { endpoint, status: reply.status });
        }

        serde_json::from_str(&reply.body).map_err(|source| ApiError::Decode { endpoint, source })
    }

    fn settle<R: Default>(result: Result<R, ApiError>, notices: &mut Vec<Notice>) -> R {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "fetch failed");
                notices.push(Notice::error(e.to_string()));
                R::default()
            }
        }
    }

    /// Fetch a list resource. A JSON `null` body counts as an empty list.
    pub async fn fetch_list<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        notices: &mut Vec<Notice>,
    ) -> Vec<R> {
        let result = self
            .get_json::<Option<Vec<R>>>(endpoint)
            .await
            .map(Option::unwrap_or_default);
        Self::settle(result, notices)
    }

    pub async fn fetch_health(&self, notices: &mut Vec<Notice>) -> Option<Health> {
        let result = self.get_json::<Health>(Endpoint::Health).await.map(Some);
        Self::settle(result, notices)
    }

    /// One full refresh cycle: every resource, in page order, each failing on its own.
    pub async fn fetch_dashboard(&self, notices: &mut Vec<Notice>) -> DashboardData {
        let health = self.fetch_health(notices).await;
        let snapshots = self.fetch_list(Endpoint::Snapshots, notices).await;
        let strategies = self.fetch_list(Endpoint::Strategies, notices).await;
        let positions = self.fetch_list(Endpoint::Positions, notices).await;
        let trades = self.fetch_list(Endpoint::Trades, notices).await;

        DashboardData {
            health,
            snapshots,
            strategies,
            positions,
            trades,
            fetched_at: Local::now(),
        }
    }

    pub async fn create_strategy(&self, strategy: &NewStrategy) -> SubmitOutcome {
        let body = match serde_json::to_value(strategy) {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::Failed(e.to_string()),
        };

        let url = Endpoint::Strategies.url(&self.base_url);
        debug!(%url, "POST");

        match self.transport.post_json(&url, &body).await {
            Ok(reply) if reply.status == HTTP_CREATED => SubmitOutcome::Created,
            Ok(reply) => SubmitOutcome::Rejected { status: reply.status, body: reply.body },
            Err(TransportError(cause)) => SubmitOutcome::Failed(cause),
        }
    }
}
