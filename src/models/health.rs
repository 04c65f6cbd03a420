use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const HEALTHY_STATUS: &str = "healthy";

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    #[serde(default, alias = "Status")]
    pub status: String,
    #[serde(default, alias = "Timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Health {
    pub fn is_online(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    /// Status as shown on the metric card
    pub fn display_status(&self) -> String {
        if self.status.is_empty() {
            "UNKNOWN".to_string()
        } else {
            self.status.to_uppercase()
        }
    }
}
