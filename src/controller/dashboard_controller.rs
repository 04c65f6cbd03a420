use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};
use tracing::{debug, error};

use crate::api::Notice;
use crate::config::IN_FLIGHT_REPAINT_MS;
use crate::models::NewStrategy;
use crate::ui::DashboardData;
use super::commands::{DashboardCommand, DashboardResponse};
use super::scheduler::RefreshScheduler;

/// Single owner of the dashboard's polling state: the refresh timer, the
/// last fetched data and the notices shown to the user.
pub struct DashboardController {
    command_tx: Sender<DashboardCommand>,
    response_rx: Receiver<DashboardResponse>,
    scheduler: RefreshScheduler,
    data: Option<DashboardData>,
    fetch_notices: Vec<Notice>,
    form_notice: Option<Notice>,
    refresh_in_flight: bool,
    submit_in_flight: bool,
    worker_lost: bool,
}

impl DashboardController {
    pub fn new(
        command_tx: Sender<DashboardCommand>,
        response_rx: Receiver<DashboardResponse>,
        scheduler: RefreshScheduler,
    ) -> Self {
        Self {
            command_tx,
            response_rx,
            scheduler,
            data: None,
            fetch_notices: Vec::new(),
            form_notice: None,
            refresh_in_flight: false,
            submit_in_flight: false,
            worker_lost: false,
        }
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub fn fetch_notices(&self) -> &[Notice] {
        &self.fetch_notices
    }

    pub fn form_notice(&self) -> Option<&Notice> {
        self.form_notice.as_ref()
    }

    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut RefreshScheduler {
        &mut self.scheduler
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_in_flight
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// The worker is gone: nothing in flight will ever be answered.
    /// Clears the pending flags and reports the loss once.
    pub fn worker_lost(&mut self) {
        self.refresh_in_flight = false;
        self.submit_in_flight = false;
        if !self.worker_lost {
            error!("fetch worker is gone");
            self.worker_lost = true;
            self.fetch_notices.push(Notice::error("Fetch worker stopped; restart the dashboard"));
        }
    }

    fn send(&mut self, command: DashboardCommand) -> bool {
        if self.command_tx.send(command).is_err() {
            self.worker_lost();
            return false;
        }
        true
    }

    /// Queue a refresh unless one is already pending
    fn send_refresh(&mut self) -> bool {
        if self.refresh_in_flight {
            return false;
        }
        self.refresh_in_flight = self.send(DashboardCommand::Refresh);
        self.refresh_in_flight
    }

    /// Manual refresh; also restarts the auto-refresh countdown
    pub fn refresh_now(&mut self, now: Instant) -> bool {
        self.scheduler.mark_refreshed(now);
        self.send_refresh()
    }

    pub fn submit_strategy(&mut self, strategy: NewStrategy) -> bool {
        if self.submit_in_flight {
            return false;
        }
        self.submit_in_flight = self.send(DashboardCommand::CreateStrategy(strategy));
        self.submit_in_flight
    }

    /// One render cycle: apply worker replies, then fire the timer if due.
    /// Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    self.handle_response(response);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.worker_lost {
                        self.worker_lost();
                        changed = true;
                    }
                    break;
                }
            }
        }

        if self.scheduler.poll(now) {
            debug!(interval_secs = self.scheduler.interval_secs(), "auto refresh due");
            changed |= self.send_refresh();
        }

        changed
    }

    fn handle_response(&mut self, response: DashboardResponse) {
        match response {
            DashboardResponse::Refreshed { data, notices } => {
                self.refresh_in_flight = false;
                self.data = Some(data);
                self.fetch_notices = notices;
            }
            DashboardResponse::StrategySubmitted(outcome) => {
                self.submit_in_flight = false;
                self.form_notice = Some(outcome.notice());
                self.send_refresh();
            }
        }
    }

    /// How long the render loop may sleep before the next `tick`
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.refresh_in_flight || self.submit_in_flight {
            return Some(Duration::from_millis(IN_FLIGHT_REPAINT_MS));
        }
        self.scheduler.time_until_due(now)
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(DashboardCommand::Shutdown);
    }
}
