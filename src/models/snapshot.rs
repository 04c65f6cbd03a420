use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One observed spot/future price sample with its computed basis
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BasisSnapshot {
    #[serde(alias = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "SpotSymbol")]
    pub spot_symbol: String,
    #[serde(alias = "FutureSymbol")]
    pub future_symbol: String,
    #[serde(alias = "SpotPrice")]
    pub spot_price: f64,
    #[serde(alias = "FuturePrice")]
    pub future_price: f64,
    #[serde(default, alias = "Basis")]
    pub basis: f64,
    #[serde(alias = "BasisPercent")]
    pub basis_percent: f64,
}

impl BasisSnapshot {
    /// Symbol pair label, `spot/future`
    pub fn pair(&self) -> String {
        format!("{}/{}", self.spot_symbol, self.future_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snake_and_pascal_case() {
        let snake: BasisSnapshot = serde_json::from_str(r#"{
            "timestamp": "2024-06-26T12:00:00Z",
            "spot_symbol": "BTC-USD",
            "future_symbol": "BTC-PERP",
            "spot_price": 61000.5,
            "future_price": 61305.0,
            "basis_percent": 0.4992
        }"#).unwrap();
        assert_eq!(snake.pair(), "BTC-USD/BTC-PERP");
        assert_eq!(snake.basis, 0.0);

        let pascal: BasisSnapshot = serde_json::from_str(r#"{
            "SpotSymbol": "ETH-USD",
            "FutureSymbol": "ETH-PERP",
            "SpotPrice": 3400.0,
            "FuturePrice": 3417.0,
            "Basis": 17.0,
            "BasisPercent": 0.5,
            "Timestamp": "2024-06-26T12:00:01.5+00:00"
        }"#).unwrap();
        assert_eq!(pascal.pair(), "ETH-USD/ETH-PERP");
        assert_eq!(pascal.basis, 17.0);
    }
}
