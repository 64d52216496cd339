//! Threat Classification Rules & Thresholds
//!
//! Gate probabilities and thresholds for classification. No classify
//! logic here - constants and config only.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Human detections above this confidence are escalated to Medium/High
pub const HUMAN_CONFIDENCE_GATE: f32 = 0.85;

/// Probability that an escalated human detection lands on High
pub const HUMAN_HIGH_PROBABILITY: f64 = 0.3;

/// Probability that a drone detection lands on High
pub const DRONE_HIGH_PROBABILITY: f64 = 0.5;

/// Location substring marking zones where vehicles are expected
pub const PARKING_ZONE_MARKER: &str = "Parking";

// ============================================================================
// CONFIGURABLE RULES (for runtime adjustment)
// ============================================================================

/// Classification rules (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRules {
    /// Human confidence above this escalates to Medium/High
    pub human_confidence_gate: f32,
    /// Chance of High for escalated humans
    pub human_high_probability: f64,
    /// Chance of High for drones
    pub drone_high_probability: f64,
    /// Location marker for expected-vehicle zones
    pub parking_zone_marker: String,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            human_confidence_gate: HUMAN_CONFIDENCE_GATE,
            human_high_probability: HUMAN_HIGH_PROBABILITY,
            drone_high_probability: DRONE_HIGH_PROBABILITY,
            parking_zone_marker: PARKING_ZONE_MARKER.to_string(),
        }
    }
}

impl ClassifierRules {
    /// High sensitivity - more detections escalate to High
    pub fn high_sensitivity() -> Self {
        Self {
            human_confidence_gate: 0.75,
            human_high_probability: 0.5,
            drone_high_probability: 0.7,
            ..Default::default()
        }
    }
}
