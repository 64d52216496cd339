//! Dispatcher - Detection Pipeline Loop
//!
//! The single control loop of the core. Pulls one event at a time from
//! the detection source and runs it through classify -> feed history ->
//! alert check -> stats as one indivisible unit of work under the state
//! lock. Readers only ever observe fully committed state.
//!
//! Two states, Running and Paused. Pausing cancels the pending scheduled
//! emission but never interrupts an in-progress unit; resuming picks the
//! schedule back up. A failed event is logged and skipped, it never halts
//! the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::logic::alerts::AlertManager;
use crate::logic::error::EngineError;
use crate::logic::feeds::FeedRegistry;
use crate::logic::source::DetectionSource;
use crate::logic::stats::StatsAggregator;
use crate::logic::threat::{classify, Detection, RawDetectionEvent, ThreatLevel};

/// Sleep granularity while waiting out an inter-arrival delay; pause and
/// stop take effect within one slice
const WAIT_SLICE_MS: u64 = 200;

// ============================================================================
// CORE STATE
// ============================================================================

/// The mutable heart of the system. The dispatcher worker is the sole
/// writer; everyone else reads committed snapshots through the lock.
pub struct CoreState {
    pub registry: FeedRegistry,
    pub alerts: AlertManager,
    pub stats: StatsAggregator,
}

pub type SharedState = Arc<Mutex<CoreState>>;

/// Run one raw event through the full pipeline: resolve feed, classify,
/// append history, raise alert, record stats. Called with the state lock
/// held, so the four steps commit atomically or not at all.
///
/// UnknownFeed fails before any mutation; the caller drops the event.
pub fn process_event<R: Rng + ?Sized>(
    state: &mut CoreState,
    event: RawDetectionEvent,
    rng: &mut R,
) -> Result<ThreatLevel, EngineError> {
    let (feed_name, feed_location) = state
        .registry
        .get(&event.feed_id)
        .map(|f| (f.name.clone(), f.location.clone()))
        .ok_or_else(|| EngineError::UnknownFeed(event.feed_id.clone()))?;

    let threat_level = classify(event.kind, event.confidence, &feed_location, rng);

    let detection = Detection {
        id: Uuid::new_v4(),
        kind: event.kind,
        confidence: event.confidence,
        position: event.position,
        timestamp: event.timestamp,
        threat_level,
        feed_id: event.feed_id,
    };

    state.registry.append_detection(detection.clone())?;
    state.alerts.maybe_alert(&detection, &feed_name);
    state.stats.record(&detection);

    Ok(threat_level)
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Owns the pipeline worker thread and its lifecycle. One instance per
/// system; independent instances never interfere.
pub struct Dispatcher {
    state: SharedState,
    paused: Arc<AtomicBool>,
    shutdown: Arc<AtomicBool>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Dispatcher {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            paused: Arc::new(AtomicBool::new(false)),
            shutdown: Arc::new(AtomicBool::new(false)),
            worker: Mutex::new(None),
        }
    }

    /// Spawn the worker loop over the given source. No-op if already
    /// started.
    pub fn start<S: DetectionSource + 'static>(&self, mut source: S) {
        let mut worker = self.worker.lock();
        if worker.is_some() {
            warn!("dispatcher already started");
            return;
        }

        self.shutdown.store(false, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);

        let state = Arc::clone(&self.state);
        let paused = Arc::clone(&self.paused);
        let shutdown = Arc::clone(&self.shutdown);

        *worker = Some(thread::spawn(move || {
            info!("dispatcher loop started");
            let mut rng = StdRng::from_entropy();

            loop {
                if shutdown.load(Ordering::SeqCst) {
                    break;
                }
                if paused.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(WAIT_SLICE_MS));
                    continue;
                }

                // Pause or stop during the wait cancels this emission
                let delay = source.next_delay();
                if !wait_cancellable(delay, &paused, &shutdown) {
                    continue;
                }

                match source.next_event() {
                    Err(e) => {
                        // Transient source failure: skip the tick, reschedule
                        warn!("tick skipped: {}", e);
                    }
                    Ok(event) => {
                        let mut state = state.lock();
                        match process_event(&mut state, event, &mut rng) {
                            Ok(level) => {
                                info!("detection processed, threat level {}", level);
                            }
                            Err(e) => {
                                warn!("detection dropped: {}", e);
                            }
                        }
                    }
                }
            }

            info!("dispatcher loop stopped");
        }));
    }

    /// Running -> Paused. Idempotent; takes effect before the next
    /// scheduled emission.
    pub fn pause(&self) {
        if !self.paused.swap(true, Ordering::SeqCst) {
            info!("dispatcher paused");
        }
    }

    /// Paused -> Running. Idempotent.
    pub fn resume(&self) {
        if self.paused.swap(false, Ordering::SeqCst) {
            info!("dispatcher resumed");
        }
    }

    pub fn is_processing(&self) -> bool {
        self.worker.lock().is_some()
            && !self.paused.load(Ordering::SeqCst)
            && !self.shutdown.load(Ordering::SeqCst)
    }

    /// Stop the worker and wait for it to finish. Idempotent.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.worker.lock().take() {
            if handle.join().is_err() {
                warn!("dispatcher worker panicked during shutdown");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleep out `delay` in slices, bailing early when paused or shut down.
/// Returns true when the full delay elapsed.
fn wait_cancellable(delay: Duration, paused: &AtomicBool, shutdown: &AtomicBool) -> bool {
    let mut remaining = delay;
    while !remaining.is_zero() {
        if paused.load(Ordering::SeqCst) || shutdown.load(Ordering::SeqCst) {
            return false;
        }
        let slice = remaining.min(Duration::from_millis(WAIT_SLICE_MS));
        thread::sleep(slice);
        remaining = remaining.saturating_sub(slice);
    }
    true
}

// ============================================================================
// TESTS
// ============================================================================
