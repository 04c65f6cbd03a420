use serde::Deserialize;
use std::fmt;

/// Side of a position, matched case-insensitively.
///
/// Anything else (including Go's empty zero value) decodes as `Unknown` so a
/// single odd record does not sink the whole `/positions` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PositionSide {
    Long,
    Short,
    Unknown,
}

impl From<String> for PositionSide {
    fn from(side: String) -> Self {
        match side.to_ascii_lowercase().as_str() {
            "long" => PositionSide::Long,
            "short" => PositionSide::Short,
            _ => PositionSide::Unknown,
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "long"),
            PositionSide::Short => write!(f, "short"),
            PositionSide::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Position {
    #[serde(alias = "Symbol")]
    pub symbol: String,
    #[serde(alias = "Side")]
    pub side: PositionSide,
    #[serde(alias = "Size")]
    pub size: f64,
    #[serde(alias = "EntryPrice")]
    pub entry_price: f64,
    #[serde(alias = "MarkPrice")]
    pub mark_price: f64,
    #[serde(alias = "UnrealizedPL")]
    pub unrealized_pl: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_decoding() {
        let position: Position = serde_json::from_str(r#"{
            "symbol": "BTC-PERP", "side": "short", "size": 0.5,
            "entry_price": 61300.0, "mark_price": 61250.0, "unrealized_pl": 25.0
        }"#).unwrap();
        assert_eq!(position.side, PositionSide::Short);
        assert_eq!(position.side.to_string(), "short");

        let long: PositionSide = serde_json::from_str(r#""LONG""#).unwrap();
        assert_eq!(long, PositionSide::Long);

        let flat: PositionSide = serde_json::from_str(r#""flat""#).unwrap();
        assert_eq!(flat, PositionSide::Unknown);
    }

    #[test]
    fn test_odd_side_keeps_rest_of_list() {
        let positions: Vec<Position> = serde_json::from_str(r#"[
            {"Symbol": "BTC-USD", "Side": "long", "Size": 0.5,
             "EntryPrice": 61000.0, "MarkPrice": 61250.0, "UnrealizedPL": 125.0},
            {"Symbol": "ETH-USD", "Side": "", "Size": 1.0,
             "EntryPrice": 3400.0, "MarkPrice": 3410.0, "UnrealizedPL": 10.0}
        ]"#).unwrap();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].side, PositionSide::Long);
        assert_eq!(positions[1].side, PositionSide::Unknown);
        assert_eq!(positions[1].side.to_string(), "unknown");
    }
}
