use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{info, warn};

use crate::api::{ApiClient, Transport};
use super::commands::{DashboardCommand, DashboardResponse};

/// Background thread owning the API client.
///
/// Commands are handled strictly in order; the GUI thread never waits on
/// network I/O.
pub struct FetchWorker<T: Transport> {
    client: ApiClient<T>,
    command_rx: Receiver<DashboardCommand>,
    response_tx: Sender<DashboardResponse>,
    runtime: tokio::runtime::Runtime,
}

impl<T: Transport> FetchWorker<T> {
    pub fn new(
        client: ApiClient<T>,
        command_rx: Receiver<DashboardCommand>,
        response_tx: Sender<DashboardResponse>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build fetch worker runtime")?;

        Ok(Self { client, command_rx, response_tx, runtime })
    }

    pub fn spawn(self) -> Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || self.run())
            .context("Failed to spawn fetch worker thread")
    }

    /// Process commands until `Shutdown` or until the GUI side hangs up
    pub fn run(self) {
        info!(base_url = self.client.base_url(), "fetch worker started");

        while let Ok(command) = self.command_rx.recv() {
            if !self.handle_command(command) {
                break;
            }
        }

        info!("fetch worker stopped");
    }

    /// Returns false when the worker should exit
    fn handle_command(&self, command: DashboardCommand) -> bool {
        let response = match command {
            DashboardCommand::Refresh => {
                let started = Instant::now();
                let mut notices = Vec::new();
                let data = self.runtime.block_on(self.client.fetch_dashboard(&mut notices));

                info!(
                    snapshots = data.snapshots.len(),
                    strategies = data.strategies.len(),
                    positions = data.positions.len(),
                    trades = data.trades.len(),
                    errors = notices.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "refresh complete"
                );
                DashboardResponse::Refreshed { data, notices }
            }
            DashboardCommand::CreateStrategy(strategy) => {
                let outcome = self.runtime.block_on(self.client.create_strategy(&strategy));
                info!(
                    spot = %strategy.spot_symbol,
                    future = %strategy.future_symbol,
                    ?outcome,
                    "strategy submitted"
                );
                DashboardResponse::StrategySubmitted(outcome)
            }
            DashboardCommand::Shutdown => return false,
        };

        if self.response_tx.send(response).is_err() {
            warn!("dashboard closed, dropping response");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, RawResponse, ScriptedTransport, SubmitOutcome};
    use crate::models::NewStrategy;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    const BASE: &str = "http://backend/api";
    const WAIT: Duration = Duration::from_secs(5);

    fn spawn_worker(
        transport: ScriptedTransport,
    ) -> (Sender<DashboardCommand>, Receiver<DashboardResponse>, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (resp_tx, resp_rx) = unbounded();
        let worker = FetchWorker::new(ApiClient::new(transport, BASE), cmd_rx, resp_tx).unwrap();
        let handle = worker.spawn().unwrap();
        (cmd_tx, resp_rx, handle)
    }

    #[test]
    fn test_refresh_round_trip() {
        let transport = ScriptedTransport::new()
            .on_get(&Endpoint::Health.url(BASE), Ok(RawResponse::new(200, r#"{"status":"healthy"}"#)))
            .on_get(&Endpoint::Snapshots.url(BASE), Ok(RawResponse::new(200, "[]")))
            .on_get(&Endpoint::Strategies.url(BASE), Ok(RawResponse::new(200, "[]")))
            .on_get(&Endpoint::Positions.url(BASE), Ok(RawResponse::new(200, "[]")))
            .on_get(&Endpoint::Trades.url(BASE), Ok(RawResponse::new(502, "bad gateway")));
        let (cmd_tx, resp_rx, handle) = spawn_worker(transport);

        cmd_tx.send(DashboardCommand::Refresh).unwrap();
        match resp_rx.recv_timeout(WAIT).unwrap() {
            DashboardResponse::Refreshed { data, notices } => {
                assert!(data.health.is_some());
                assert_eq!(notices.len(), 1);
                assert_eq!(notices[0].message, "Failed to fetch trades: 502");
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(DashboardCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_create_strategy_round_trip() {
        let transport = ScriptedTransport::new()
            .on_post(&Endpoint::Strategies.url(BASE), Ok(RawResponse::new(201, "{}")));
        let (cmd_tx, resp_rx, handle) = spawn_worker(transport.clone());

        cmd_tx.send(DashboardCommand::CreateStrategy(NewStrategy {
            spot_symbol: "BTC-USD".into(),
            future_symbol: "BTC-PERP".into(),
            target_basis: 5.0,
            max_position: 1.0,
            min_trade_size: 0.01,
            is_active: true,
        })).unwrap();

        match resp_rx.recv_timeout(WAIT).unwrap() {
            DashboardResponse::StrategySubmitted(outcome) => assert_eq!(outcome, SubmitOutcome::Created),
            other => panic!("unexpected response: {:?}", other),
        }
        assert_eq!(transport.requests().len(), 1);

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
