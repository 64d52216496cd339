//! IDS Core - Headless Runner
//!
//! Starts the detection pipeline over the synthetic source and logs a
//! stats summary on a fixed cadence. The real deployment binds a
//! presentation layer to the same SystemController surface.

use std::thread;
use std::time::Duration;

use ids_core::constants::{APP_NAME, APP_VERSION};
use ids_core::SystemController;

/// Cadence of the stats summary log line
const STATUS_LOG_INTERVAL_SECS: u64 = 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let controller = SystemController::new();
    for feed in controller.list_feeds() {
        log::info!(
            "monitoring {} ({}) at {} [{}]",
            feed.name,
            feed.id,
            feed.location,
            feed.kind.as_str()
        );
    }

    controller.start_synthetic();
    log::info!("detection pipeline running");

    loop {
        thread::sleep(Duration::from_secs(STATUS_LOG_INTERVAL_SECS));
        let status = controller.system_status();
        log::info!(
            "{} detections, {} high threat, {} open alerts",
            status.total_detections,
            status.high_threat_alerts,
            status.unacknowledged_alerts
        );
    }
}
