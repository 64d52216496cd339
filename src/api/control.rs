//! System Controller - API for the presentation layer
//!
//! One owned handle per system instance. Wraps the shared core state and
//! the dispatcher lifecycle behind snapshot-returning accessors and a
//! small set of operator actions.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::alerts::{Alert, AlertManager};
use crate::logic::dispatcher::{CoreState, Dispatcher, SharedState};
use crate::logic::error::EngineError;
use crate::logic::feeds::{default_feeds, Feed, FeedRegistry, FeedStatus};
use crate::logic::source::{DetectionSource, SyntheticSource};
use crate::logic::stats::{Stats, StatsAggregator};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// System state summary for display binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub is_processing: bool,
    pub total_detections: u64,
    pub high_threat_alerts: u64,
    pub false_alarm_rate: f32,
    pub system_uptime: String,
    pub active_feeds: usize,
    pub unacknowledged_alerts: usize,
}

// ============================================================================
// SYSTEM CONTROLLER
// ============================================================================

pub struct SystemController {
    state: SharedState,
    dispatcher: Dispatcher,
}

impl SystemController {
    /// Build a system over the default site roster
    pub fn new() -> Self {
        Self::with_feeds(default_feeds())
    }

    /// Build a system over a custom roster
    pub fn with_feeds(roster: Vec<Feed>) -> Self {
        let state: SharedState = Arc::new(Mutex::new(CoreState {
            registry: FeedRegistry::new(roster),
            alerts: AlertManager::new(),
            stats: StatsAggregator::new(),
        }));
        let dispatcher = Dispatcher::new(Arc::clone(&state));
        Self { state, dispatcher }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Start processing events from the given source
    pub fn start<S: DetectionSource + 'static>(&self, source: S) {
        self.dispatcher.start(source);
    }

    /// Start processing synthetic detections against the registered roster
    pub fn start_synthetic(&self) {
        let feed_ids = self
            .state
            .lock()
            .registry
            .list()
            .iter()
            .map(|f| f.id.clone())
            .collect();
        self.dispatcher.start(SyntheticSource::new(feed_ids));
    }

    /// Suspend event intake. Idempotent; already-recorded state is kept.
    pub fn pause(&self) {
        self.dispatcher.pause();
    }

    /// Resume event intake. Idempotent.
    pub fn resume(&self) {
        self.dispatcher.resume();
    }

    pub fn is_processing(&self) -> bool {
        self.dispatcher.is_processing()
    }

    /// Stop the pipeline and wait for the worker to exit
    pub fn stop(&self) {
        self.dispatcher.stop();
    }

    // ------------------------------------------------------------------
    // Operator actions
    // ------------------------------------------------------------------

    /// Mark an alert acknowledged; not-found for unknown ids
    pub fn acknowledge_alert(&self, alert_id: Uuid) -> Result<(), EngineError> {
        self.state.lock().alerts.acknowledge(alert_id)
    }

    /// Toggle a feed's monitored status; not-found for unknown ids
    pub fn set_feed_status(&self, feed_id: &str, status: FeedStatus) -> Result<(), EngineError> {
        self.state.lock().registry.set_status(feed_id, status)
    }

    pub fn set_false_alarm_rate(&self, rate: f32) {
        self.state.lock().stats.set_false_alarm_rate(rate);
    }

    pub fn set_system_uptime(&self, uptime: String) {
        self.state.lock().stats.set_system_uptime(uptime);
    }

    // ------------------------------------------------------------------
    // Read accessors (committed snapshots)
    // ------------------------------------------------------------------

    /// Resolve one feed to a snapshot; None when unknown. Pure read.
    pub fn select_feed(&self, feed_id: &str) -> Option<Feed> {
        self.state.lock().registry.get(feed_id).cloned()
    }

    /// All feeds in registration order
    pub fn list_feeds(&self) -> Vec<Feed> {
        self.state.lock().registry.list().to_vec()
    }

    /// All retained alerts, most recent first
    pub fn list_alerts(&self) -> Vec<Alert> {
        self.state.lock().alerts.list_all()
    }

    /// Open alerts, most recent first
    pub fn list_unacknowledged_alerts(&self) -> Vec<Alert> {
        self.state.lock().alerts.list_unacknowledged()
    }

    pub fn get_stats(&self) -> Stats {
        self.state.lock().stats.snapshot()
    }

    /// System state summary for display binding
    pub fn system_status(&self) -> SystemStatus {
        // Dispatcher state is read before the state lock; stop() joins the
        // worker while holding the handle lock and the worker takes the
        // state lock, so the two must not nest the other way around
        let is_processing = self.dispatcher.is_processing();
        let state = self.state.lock();
        let stats = state.stats.snapshot();
        SystemStatus {
            is_processing,
            total_detections: stats.total_detections,
            high_threat_alerts: stats.high_threat_alerts,
            false_alarm_rate: stats.false_alarm_rate,
            system_uptime: stats.system_uptime,
            active_feeds: state
                .registry
                .list()
                .iter()
                .filter(|f| f.status == FeedStatus::Active)
                .count(),
            unacknowledged_alerts: state.alerts.list_unacknowledged().len(),
        }
    }

    /// Aggregate statistics as loose JSON
    pub fn get_statistics(&self) -> serde_json::Value {
        let is_processing = self.dispatcher.is_processing();
        let state = self.state.lock();
        let stats = state.stats.snapshot();
        serde_json::json!({
            "total_detections": stats.total_detections,
            "high_threat_alerts": stats.high_threat_alerts,
            "false_alarm_rate": stats.false_alarm_rate,
            "system_uptime": stats.system_uptime,
            "feeds": state.registry.list().len(),
            "alerts_retained": state.alerts.len(),
            "is_processing": is_processing,
        })
    }
}

impl Default for SystemController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
