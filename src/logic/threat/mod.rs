//! Threat Module
//!
//! Classifies raw detections into Low/Medium/High threat levels.
//! This is the CORE STEP - the decision point of the whole pipeline.
//!
//! ## Structure
//! - `types`: Core types (ThreatLevel, DetectionKind, Detection, etc.)
//! - `rules`: Thresholds and gate probabilities
//! - `classifier`: Classification logic

pub mod types;
pub mod rules;
pub mod classifier;

// Re-export main types for convenience
pub use types::{
    ThreatLevel,
    DetectionKind,
    BoundingBox,
    Detection,
    RawDetectionEvent,
};

pub use rules::{
    ClassifierRules,
    HUMAN_CONFIDENCE_GATE,
    HUMAN_HIGH_PROBABILITY,
    DRONE_HIGH_PROBABILITY,
    PARKING_ZONE_MARKER,
};

pub use classifier::{classify, classify_with_rules};
