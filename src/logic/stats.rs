//! Stats Aggregator
//!
//! Rolling counters derived from processed detections, plus two
//! operator-supplied display metrics that the pipeline never touches.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::threat::{Detection, ThreatLevel};

/// Process-wide counters, returned to readers as a copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// One per processed detection, monotonic
    pub total_detections: u64,
    /// Incremented only for High classifications
    pub high_threat_alerts: u64,
    /// Operator-supplied display metric (percent), not computed state
    pub false_alarm_rate: f32,
    /// Operator-supplied display metric, not computed state
    pub system_uptime: String,
}

pub struct StatsAggregator {
    stats: Stats,
}

impl StatsAggregator {
    /// Display metrics start from configuration defaults
    pub fn new() -> Self {
        Self {
            stats: Stats {
                total_detections: 0,
                high_threat_alerts: 0,
                false_alarm_rate: constants::get_false_alarm_rate(),
                system_uptime: constants::get_system_uptime(),
            },
        }
    }

    /// Record one processed detection. Display metrics are never mutated
    /// here.
    pub fn record(&mut self, detection: &Detection) {
        self.stats.total_detections += 1;
        if detection.threat_level == ThreatLevel::High {
            self.stats.high_threat_alerts += 1;
        }
    }

    /// Read-only copy of the current counters
    pub fn snapshot(&self) -> Stats {
        self.stats.clone()
    }

    pub fn set_false_alarm_rate(&mut self, rate: f32) {
        self.stats.false_alarm_rate = rate;
    }

    pub fn set_system_uptime(&mut self, uptime: String) {
        self.stats.system_uptime = uptime;
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
