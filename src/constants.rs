//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Caps and interval bounds are fixed; display metrics can be overridden
//! through environment variables.

/// Maximum detections retained per feed (oldest evicted first)
pub const FEED_HISTORY_CAP: usize = 5;

/// Maximum alerts retained in the queue (oldest evicted first)
pub const ALERT_QUEUE_CAP: usize = 10;

/// Lower bound of the synthetic inter-arrival delay (ms)
pub const MIN_EMIT_INTERVAL_MS: u64 = 3_000;

/// Upper bound of the synthetic inter-arrival delay (ms)
pub const MAX_EMIT_INTERVAL_MS: u64 = 8_000;

/// Default false alarm rate shown to operators (percent)
pub const DEFAULT_FALSE_ALARM_RATE: f32 = 12.0;

/// Default system uptime display string
pub const DEFAULT_SYSTEM_UPTIME: &str = "99.8%";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "IDS Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get false alarm rate from environment or use default
pub fn get_false_alarm_rate() -> f32 {
    std::env::var("IDS_FALSE_ALARM_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FALSE_ALARM_RATE)
}

/// Get system uptime display string from environment or use default
pub fn get_system_uptime() -> String {
    std::env::var("IDS_SYSTEM_UPTIME")
        .unwrap_or_else(|_| DEFAULT_SYSTEM_UPTIME.to_string())
}
