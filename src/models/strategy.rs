use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A basis-trading rule as stored by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Strategy {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "SpotSymbol")]
    pub spot_symbol: String,
    #[serde(alias = "FutureSymbol")]
    pub future_symbol: String,
    #[serde(alias = "TargetBasis")]
    pub target_basis: f64,
    #[serde(alias = "MaxPosition")]
    pub max_position: f64,
    #[serde(alias = "MinTradeSize")]
    pub min_trade_size: f64,
    #[serde(default, alias = "RebalanceThreshold")]
    pub rebalance_threshold: f64,
    #[serde(alias = "IsActive")]
    pub is_active: bool,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "UpdatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /strategies`. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStrategy {
    pub spot_symbol: String,
    pub future_symbol: String,
    pub target_basis: f64,
    pub max_position: f64,
    pub min_trade_size: f64,
    pub is_active: bool,
}
