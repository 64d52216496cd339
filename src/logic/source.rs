//! Detection Sources
//!
//! The detection source is an external collaborator: a live video
//! pipeline, a replay log, or the synthetic generator below. The
//! dispatcher only assumes events arrive one at a time and fully formed.

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MAX_EMIT_INTERVAL_MS, MIN_EMIT_INTERVAL_MS};
use crate::logic::error::EngineError;
use crate::logic::threat::{BoundingBox, DetectionKind, RawDetectionEvent};

/// Producer of raw detection events, one per scheduled tick
pub trait DetectionSource: Send {
    /// How long the dispatcher should wait before the next tick
    fn next_delay(&mut self) -> Duration;

    /// Produce one event. A transient failure skips the tick; the
    /// dispatcher reschedules.
    fn next_event(&mut self) -> Result<RawDetectionEvent, EngineError>;
}

// ============================================================================
// SYNTHETIC SOURCE
// ============================================================================

/// Seedable stand-in for the vision pipeline. Emits plausible detections
/// against a fixed roster of feed ids with confidence in [0.7, 1.0] and a
/// 3-8 second cadence.
pub struct SyntheticSource {
    feed_ids: Vec<String>,
    rng: StdRng,
}

impl SyntheticSource {
    pub fn new(feed_ids: Vec<String>) -> Self {
        Self::from_rng(feed_ids, StdRng::from_entropy())
    }

    /// Reproducible generation for tests and replays
    pub fn with_seed(feed_ids: Vec<String>, seed: u64) -> Self {
        Self::from_rng(feed_ids, StdRng::seed_from_u64(seed))
    }

    fn from_rng(feed_ids: Vec<String>, rng: StdRng) -> Self {
        Self { feed_ids, rng }
    }
}

impl DetectionSource for SyntheticSource {
    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(MIN_EMIT_INTERVAL_MS..MAX_EMIT_INTERVAL_MS))
    }

    fn next_event(&mut self) -> Result<RawDetectionEvent, EngineError> {
        if self.feed_ids.is_empty() {
            return Err(EngineError::SourceFailure(
                "synthetic source has no feeds to draw from".to_string(),
            ));
        }

        let feed_id = self.feed_ids[self.rng.gen_range(0..self.feed_ids.len())].clone();
        let kind = DetectionKind::ALL[self.rng.gen_range(0..DetectionKind::ALL.len())];

        Ok(RawDetectionEvent {
            feed_id,
            kind,
            confidence: 0.7 + self.rng.gen::<f32>() * 0.3,
            position: BoundingBox {
                x: self.rng.gen::<f32>() * 300.0,
                y: self.rng.gen::<f32>() * 200.0,
                width: 40.0 + self.rng.gen::<f32>() * 60.0,
                height: 40.0 + self.rng.gen::<f32>() * 60.0,
            },
            timestamp: Utc::now(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
