use chrono::{DateTime, Local};

use crate::models::{BasisSnapshot, Health, Position, Strategy, Trade};

/// Everything fetched in one refresh cycle. Last fetched wins.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub health: Option<Health>,
    /// Latest first
    pub snapshots: Vec<BasisSnapshot>,
    pub strategies: Vec<Strategy>,
    pub positions: Vec<Position>,
    pub trades: Vec<Trade>,
    pub fetched_at: DateTime<Local>,
}

impl DashboardData {
    pub fn latest_snapshot(&self) -> Option<&BasisSnapshot> {
        self.snapshots.first()
    }

    /// The last `count` trades in the order the backend sent them
    pub fn recent_trades(&self, count: usize) -> &[Trade] {
        let start = self.trades.len().saturating_sub(count);
        &self.trades[start..]
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::PositionSide;

    pub fn snapshot(spot: &str, future: &str, secs: i64, basis_percent: f64) -> BasisSnapshot {
        BasisSnapshot {
            timestamp: Utc.timestamp_opt(1_719_403_200 + secs, 0).unwrap(),
            spot_symbol: spot.to_string(),
            future_symbol: future.to_string(),
            spot_price: 61_000.0 + secs as f64,
            future_price: 61_300.0 + secs as f64,
            basis: 300.0,
            basis_percent,
        }
    }

    pub fn position(symbol: &str, side: PositionSide, size: f64) -> Position {
        Position {
            symbol: symbol.to_string(),
            side,
            size,
            entry_price: 100.0,
            mark_price: 101.0,
            unrealized_pl: size,
        }
    }

    pub fn trade(id: usize) -> Trade {
        Trade {
            id: id.to_string(),
            strategy_id: "s1".to_string(),
            side: "enter".to_string(),
            size: 0.1,
            spot_price: 61_000.0,
            future_price: 61_300.0,
            basis: 300.0,
            status: "filled".to_string(),
            created_at: Utc.timestamp_opt(1_719_403_200 + id as i64, 0).unwrap(),
        }
    }

    pub fn empty_data() -> DashboardData {
        DashboardData {
            health: None,
            snapshots: Vec::new(),
            strategies: Vec::new(),
            positions: Vec::new(),
            trades: Vec::new(),
            fetched_at: Local::now(),
        }
    }
}
