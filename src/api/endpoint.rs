use std::fmt;

/// Backend resources the dashboard reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Snapshots,
    Strategies,
    Positions,
    Trades,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::Snapshots => "basis/snapshots",
            Endpoint::Strategies => "strategies",
            Endpoint::Positions => "positions",
            Endpoint::Trades => "trades",
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
