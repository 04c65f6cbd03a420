use crate::api::{Notice, SubmitOutcome};
use crate::models::NewStrategy;
use crate::ui::DashboardData;

/// Commands sent from the GUI to the fetch worker
#[derive(Debug, Clone)]
pub enum DashboardCommand {
    /// Fetch every resource once
    Refresh,
    /// Create a strategy on the backend
    CreateStrategy(NewStrategy),
    /// Stop the worker thread
    Shutdown,
}

/// Worker replies sent back to the GUI
#[derive(Debug, Clone)]
pub enum DashboardResponse {
    /// A refresh cycle finished; `notices` holds this cycle's fetch errors
    Refreshed {
        data: DashboardData,
        notices: Vec<Notice>,
    },
    /// A strategy submission finished
    StrategySubmitted(SubmitOutcome),
}
