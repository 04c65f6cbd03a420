use eframe::egui::Color32;

use crate::models::{Position, PositionSide};

const LONG_COLOR: Color32 = Color32::from_rgb(0x00, 0xCC, 0x88);
const SHORT_COLOR: Color32 = Color32::from_rgb(0xFF, 0x44, 0x44);
const UNKNOWN_COLOR: Color32 = Color32::GRAY;

pub fn side_color(side: PositionSide) -> Color32 {
    match side {
        PositionSide::Long => LONG_COLOR,
        PositionSide::Short => SHORT_COLOR,
        PositionSide::Unknown => UNKNOWN_COLOR,
    }
}

/// Bars of one side: `(symbol slot, summed size)`
#[derive(Debug, Clone, PartialEq)]
pub struct SideBars {
    pub side: PositionSide,
    pub color: Color32,
    pub bars: Vec<(usize, f64)>,
}

/// Position sizes per symbol, grouped by side
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBars {
    /// X-axis slots in first-seen order
    pub symbols: Vec<String>,
    /// Long first, then short; sides without positions are omitted
    pub groups: Vec<SideBars>,
}

impl PositionBars {
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut symbols: Vec<String> = Vec::new();
        let mut groups: Vec<SideBars> = [PositionSide::Long, PositionSide::Short]
            .into_iter()
            .map(|side| SideBars { side, color: side_color(side), bars: Vec::new() })
            .collect();

        for position in positions {
            // unknown sides stay in the table but get no bar
            let Some(group) = groups.iter_mut().find(|g| g.side == position.side) else {
                continue;
            };

            let slot = match symbols.iter().position(|s| *s == position.symbol) {
                Some(slot) => slot,
                None => {
                    symbols.push(position.symbol.clone());
                    symbols.len() - 1
                }
            };
            match group.bars.iter_mut().find(|(s, _)| *s == slot) {
                Some((_, size)) => *size += position.size,
                None => group.bars.push((slot, position.size)),
            }
        }

        groups.retain(|g| !g.bars.is_empty());
        Self { symbols, groups }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::data::fixtures::position;

    #[test]
    fn test_grouped_by_side_with_fixed_colors() {
        let positions = vec![
            position("BTC-USD", PositionSide::Long, 0.5),
            position("BTC-PERP", PositionSide::Short, 0.5),
            position("ETH-USD", PositionSide::Long, 2.0),
        ];

        let chart = PositionBars::from_positions(&positions);

        assert_eq!(chart.symbols, vec!["BTC-USD", "BTC-PERP", "ETH-USD"]);
        assert_eq!(chart.groups.len(), 2);

        let long = &chart.groups[0];
        assert_eq!(long.side, PositionSide::Long);
        assert_eq!(long.color, Color32::from_rgb(0x00, 0xCC, 0x88));
        assert_eq!(long.bars, vec![(0, 0.5), (2, 2.0)]);

        let short = &chart.groups[1];
        assert_eq!(short.side, PositionSide::Short);
        assert_eq!(short.color, Color32::from_rgb(0xFF, 0x44, 0x44));
        assert_eq!(short.bars, vec![(1, 0.5)]);
    }

    #[test]
    fn test_same_symbol_and_side_is_summed() {
        let positions = vec![
            position("SOL-USD", PositionSide::Short, 1.0),
            position("SOL-USD", PositionSide::Short, 1.5),
        ];

        let chart = PositionBars::from_positions(&positions);

        assert_eq!(chart.groups.len(), 1);
        assert_eq!(chart.groups[0].side, PositionSide::Short);
        assert_eq!(chart.groups[0].bars, vec![(0, 2.5)]);
    }

    #[test]
    fn test_unknown_side_gets_no_bar() {
        let positions = vec![
            position("XRP-USD", PositionSide::Unknown, 10.0),
            position("BTC-USD", PositionSide::Long, 0.5),
        ];

        let chart = PositionBars::from_positions(&positions);

        assert_eq!(chart.symbols, vec!["BTC-USD"]);
        assert_eq!(chart.groups.len(), 1);
        assert_eq!(chart.groups[0].bars, vec![(0, 0.5)]);
    }

    #[test]
    fn test_no_positions() {
        assert!(PositionBars::from_positions(&[]).is_empty());
    }
}
