//! Error Taxonomy
//!
//! Every failure in the core is recoverable; nothing here is fatal to the
//! process. The dispatcher logs and keeps going, callers of the control
//! surface get a typed not-found result.

use thiserror::Error;
use uuid::Uuid;

/// Recoverable failures of the detection core
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A detection event referenced a feed id not present in the registry.
    /// The detection is dropped and processing continues.
    #[error("unknown feed: {0}")]
    UnknownFeed(String),

    /// Acknowledge was called with a nonexistent alert id. No state change.
    #[error("unknown alert: {0}")]
    UnknownAlert(Uuid),

    /// The detection source failed to produce an event on a tick.
    /// The tick is skipped and the dispatcher reschedules.
    #[error("detection source failure: {0}")]
    SourceFailure(String),
}
