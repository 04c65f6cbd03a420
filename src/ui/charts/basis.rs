use crate::models::BasisSnapshot;

pub const NO_BASIS_DATA: &str = "No basis data available yet";

/// Basis-percent points of one symbol pair, `[unix_seconds, basis_percent]`
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSeries {
    pub pair: String,
    pub points: Vec<[f64; 2]>,
}

/// What the basis section shows
#[derive(Debug, Clone, PartialEq)]
pub enum BasisPanel {
    Placeholder(&'static str),
    Chart(Vec<BasisSeries>),
}

impl BasisPanel {
    pub fn from_snapshots(snapshots: &[BasisSnapshot]) -> Self {
        if snapshots.is_empty() {
            BasisPanel::Placeholder(NO_BASIS_DATA)
        } else {
            BasisPanel::Chart(BasisSeries::group(snapshots))
        }
    }
}

impl BasisSeries {
    /// One series per pair, pairs in first-seen order, points oldest first
    pub fn group(snapshots: &[BasisSnapshot]) -> Vec<BasisSeries> {
        let mut series: Vec<(BasisSeries, Vec<(i64, f64)>)> = Vec::new();

        for snapshot in snapshots {
            let pair = snapshot.pair();
            let sample = (snapshot.timestamp.timestamp_micros(), snapshot.basis_percent);
            match series.iter_mut().find(|(s, _)| s.pair == pair) {
                Some((_, samples)) => samples.push(sample),
                None => series.push((BasisSeries { pair, points: Vec::new() }, vec![sample])),
            }
        }

        series
            .into_iter()
            .map(|(mut s, mut samples)| {
                samples.sort_by_key(|(micros, _)| *micros);
                s.points = samples
                    .into_iter()
                    .map(|(micros, basis)| [micros as f64 / 1_000_000.0, basis])
                    .collect();
                s
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::data::fixtures::snapshot;

    #[test]
    fn test_empty_snapshots_show_placeholder() {
        assert_eq!(BasisPanel::from_snapshots(&[]), BasisPanel::Placeholder(NO_BASIS_DATA));
    }

    #[test]
    fn test_two_pairs_make_two_sorted_series() {
        let snapshots = vec![
            snapshot("BTC-USD", "BTC-PERP", 20, 0.52),
            snapshot("ETH-USD", "ETH-PERP", 20, 0.31),
            snapshot("BTC-USD", "BTC-PERP", 10, 0.50),
            snapshot("ETH-USD", "ETH-PERP", 10, 0.30),
            snapshot("BTC-USD", "BTC-PERP", 0, 0.48),
        ];

        let BasisPanel::Chart(series) = BasisPanel::from_snapshots(&snapshots) else {
            panic!("expected a chart");
        };

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].pair, "BTC-USD/BTC-PERP");
        assert_eq!(series[1].pair, "ETH-USD/ETH-PERP");
        assert_eq!(series[0].points.len(), 3);
        assert_eq!(series[1].points.len(), 2);

        for s in &series {
            assert!(s.points.windows(2).all(|w| w[0][0] <= w[1][0]));
        }
        assert_eq!(series[0].points[0][1], 0.48);
        assert_eq!(series[0].points[2][1], 0.52);
    }

    #[test]
    fn test_same_symbols_different_pair_are_distinct() {
        let snapshots = vec![
            snapshot("BTC-USD", "BTC-PERP", 0, 0.5),
            snapshot("BTC-USD", "BTC-0927", 0, 1.2),
        ];
        assert_eq!(BasisSeries::group(&snapshots).len(), 2);
    }
}
