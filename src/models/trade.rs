use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An executed (or in-progress) basis trade
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "StrategyID")]
    pub strategy_id: String,
    /// `enter` or `exit` on the reference backend
    #[serde(alias = "Side")]
    pub side: String,
    #[serde(alias = "Size")]
    pub size: f64,
    #[serde(alias = "SpotPrice")]
    pub spot_price: f64,
    #[serde(alias = "FuturePrice")]
    pub future_price: f64,
    #[serde(alias = "Basis")]
    pub basis: f64,
    #[serde(alias = "Status")]
    pub status: String,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}
