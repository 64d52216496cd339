//! Operator Recommendations
//!
//! Guidance lookup keyed by (detection kind, threat level). Covers all
//! eight alertable combinations; Low never reaches the alert path and has
//! no entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::logic::threat::{DetectionKind, ThreatLevel};

static RECOMMENDATIONS: Lazy<HashMap<(DetectionKind, ThreatLevel), &'static str>> =
    Lazy::new(|| {
        use DetectionKind::*;
        use ThreatLevel::*;

        HashMap::from([
            (
                (Human, High),
                "Dispatch security personnel immediately. Verify identity and intent.",
            ),
            (
                (Human, Medium),
                "Monitor closely. Prepare security response if behavior escalates.",
            ),
            (
                (Vehicle, High),
                "Block access routes. Verify authorization immediately.",
            ),
            (
                (Vehicle, Medium),
                "Check vehicle registration. Monitor movement patterns.",
            ),
            (
                (Animal, High),
                "Contact animal control. Ensure personnel safety.",
            ),
            (
                (Animal, Medium),
                "Monitor animal behavior. Clear area if aggressive.",
            ),
            (
                (Drone, High),
                "Activate counter-drone measures. Alert aviation authorities.",
            ),
            (
                (Drone, Medium),
                "Track drone path. Attempt identification of operator.",
            ),
        ])
    });

/// Guidance for an alertable (kind, level) pair; None for Low.
pub fn recommendation_for(kind: DetectionKind, level: ThreatLevel) -> Option<&'static str> {
    RECOMMENDATIONS.get(&(kind, level)).copied()
}
