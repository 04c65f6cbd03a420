// New strategy form defaults
pub const DEFAULT_SPOT_SYMBOL: &str = "BTC-USD";
pub const DEFAULT_FUTURE_SYMBOL: &str = "BTC-PERP";
pub const DEFAULT_TARGET_BASIS: f64 = 5.0;
pub const DEFAULT_MAX_POSITION: f64 = 1.0;
pub const DEFAULT_MIN_TRADE_SIZE: f64 = 0.01;

pub const TARGET_BASIS_STEP: f64 = 0.1;
pub const MAX_POSITION_STEP: f64 = 0.1;
pub const MIN_TRADE_SIZE_STEP: f64 = 0.001;
