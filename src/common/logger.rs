use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_ONCE: OnceLock<()> = OnceLock::new();
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,eframe=warn,egui_glow=warn";

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_logging() {
    LOGGER_ONCE.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_level(true))
            .init();
    });
}
