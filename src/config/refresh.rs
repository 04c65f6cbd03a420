/// Bounds of the auto-refresh interval slider, in seconds
pub const MIN_REFRESH_SECS: u64 = 1;
pub const MAX_REFRESH_SECS: u64 = 60;

pub const DEFAULT_REFRESH_SECS: u64 = 5;
pub const DEFAULT_AUTO_REFRESH: bool = true;

/// Repaint cadence while a refresh is in flight (milliseconds)
pub const IN_FLIGHT_REPAINT_MS: u64 = 200;
