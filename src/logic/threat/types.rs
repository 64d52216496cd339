//! Threat Types
//!
//! Core types for the detection pipeline. No logic - data structures only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// THREAT LEVEL
// ============================================================================

/// Ordinal threat classification assigned to every detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    /// Routine observation, no operator action needed
    Low,
    /// Worth watching, generates an alert
    Medium,
    /// Requires immediate operator response, generates an alert
    High,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "Low",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::High => "High",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            ThreatLevel::Low => 0,
            ThreatLevel::Medium => 1,
            ThreatLevel::High => 2,
        }
    }

    /// Medium and High detections produce operator alerts
    pub fn is_alertable(&self) -> bool {
        self.severity_level() >= ThreatLevel::Medium.severity_level()
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION KIND
// ============================================================================

/// What the vision pipeline believes it saw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionKind {
    Human,
    Vehicle,
    Animal,
    Drone,
}

impl DetectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionKind::Human => "human",
            DetectionKind::Vehicle => "vehicle",
            DetectionKind::Animal => "animal",
            DetectionKind::Drone => "drone",
        }
    }

    pub const ALL: [DetectionKind; 4] = [
        DetectionKind::Human,
        DetectionKind::Vehicle,
        DetectionKind::Animal,
        DetectionKind::Drone,
    ];
}

impl std::fmt::Display for DetectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// BOUNDING BOX
// ============================================================================

/// Where in the frame the detection sits. Descriptive only; all fields
/// are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ============================================================================
// DETECTION
// ============================================================================

/// A single classified observation from a feed. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub id: Uuid,
    pub kind: DetectionKind,
    /// Detector confidence in [0.0, 1.0]
    pub confidence: f32,
    pub position: BoundingBox,
    pub timestamp: DateTime<Utc>,
    pub threat_level: ThreatLevel,
    /// References a feed in the registry; not ownership
    pub feed_id: String,
}

// ============================================================================
// RAW DETECTION EVENT
// ============================================================================

/// Producer-side event as emitted by a detection source, before
/// classification. Fully formed; the dispatcher turns it into a Detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetectionEvent {
    pub feed_id: String,
    pub kind: DetectionKind,
    pub confidence: f32,
    pub position: BoundingBox,
    pub timestamp: DateTime<Utc>,
}
