//! Alert Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::threat::Detection;

/// Operator-facing record generated for a Medium/High detection.
///
/// Holds its own copy of the triggering detection so it stays readable
/// after the originating feed's history buffer evicts that entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub detection: Detection,
    /// Human-readable summary, e.g. "High threat detected: human at Main Entrance"
    pub message: String,
    /// Operator guidance selected by (kind, threat level)
    pub recommendation: String,
    pub acknowledged: bool,
    pub timestamp: DateTime<Utc>,
}
