mod api;
mod common;
mod config;
mod controller;
mod models;
mod ui;

use anyhow::Result;
use config::DashboardConfig;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    common::logger::init_logging();

    let config = DashboardConfig::from_env();
    ui::launch_dashboard(config)
}
