pub mod commands;
pub mod dashboard_controller;
pub mod fetch_worker;
pub mod scheduler;

pub use dashboard_controller::DashboardController;
pub use fetch_worker::FetchWorker;
pub use scheduler::RefreshScheduler;
