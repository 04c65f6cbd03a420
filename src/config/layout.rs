pub const WINDOW_SIZE: [f32; 2] = [1400.0, 950.0];
pub const SIDE_PANEL_WIDTH: f32 = 320.0;

pub const BASIS_CHART_HEIGHT: f32 = 400.0;
pub const POSITION_CHART_HEIGHT: f32 = 300.0;

/// Number of most recent trades shown in the trades table
pub const RECENT_TRADE_ROWS: usize = 10;
