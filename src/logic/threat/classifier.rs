//! Threat Classifier
//!
//! Pure classify logic - no types, no state. Total over the full
//! confidence range [0.0, 1.0]; never fails.
//!
//! The random source is injected by the caller so classification is
//! reproducible under test with a seeded generator. There is no hidden
//! global RNG anywhere in this module.

use rand::Rng;

use super::rules::ClassifierRules;
use super::types::{DetectionKind, ThreatLevel};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Main classification function
///
/// Rules are evaluated in order, first match wins:
/// 1. Human above the confidence gate: one uniform draw, 30% High,
///    otherwise Medium.
/// 2. Vehicle in a parking zone: Low.
/// 3. Drone: one uniform draw, 50% High, otherwise Medium.
/// 4. Everything else: Low.
pub fn classify<R: Rng + ?Sized>(
    kind: DetectionKind,
    confidence: f32,
    feed_location: &str,
    rng: &mut R,
) -> ThreatLevel {
    classify_with_rules(kind, confidence, feed_location, rng, &ClassifierRules::default())
}

/// Classification with custom rules
pub fn classify_with_rules<R: Rng + ?Sized>(
    kind: DetectionKind,
    confidence: f32,
    feed_location: &str,
    rng: &mut R,
    rules: &ClassifierRules,
) -> ThreatLevel {
    match kind {
        DetectionKind::Human if confidence > rules.human_confidence_gate => {
            // Gate to {Medium, High}: single uniform draw
            if rng.gen::<f64>() < rules.human_high_probability {
                ThreatLevel::High
            } else {
                ThreatLevel::Medium
            }
        }
        DetectionKind::Vehicle if feed_location.contains(&rules.parking_zone_marker) => {
            ThreatLevel::Low
        }
        DetectionKind::Drone => {
            if rng.gen::<f64>() < rules.drone_high_probability {
                ThreatLevel::High
            } else {
                ThreatLevel::Medium
            }
        }
        _ => ThreatLevel::Low,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Draws ~0.0 from gen::<f64>() - forces the High branch
    fn rng_low() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Draws ~1.0 from gen::<f64>() - forces the Medium branch
    fn rng_high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn confident_human_forced_high() {
        let level = classify(DetectionKind::Human, 0.90, "Building A", &mut rng_low());
        assert_eq!(level, ThreatLevel::High);
    }

    #[test]
    fn confident_human_forced_medium() {
        let level = classify(DetectionKind::Human, 0.90, "Building A", &mut rng_high());
        assert_eq!(level, ThreatLevel::Medium);
    }

    #[test]
    fn human_below_gate_is_low() {
        // 0.85 is not strictly above the gate
        let level = classify(DetectionKind::Human, 0.85, "Building A", &mut rng_low());
        assert_eq!(level, ThreatLevel::Low);
    }

    #[test]
    fn vehicle_in_parking_zone_is_low() {
        // Rule 2 fires before the fallthrough, no draw taken
        let level = classify(DetectionKind::Vehicle, 0.95, "Parking Lot", &mut rng_low());
        assert_eq!(level, ThreatLevel::Low);
    }

    #[test]
    fn vehicle_outside_parking_zone_is_low() {
        let level = classify(DetectionKind::Vehicle, 0.95, "Building C", &mut rng_low());
        assert_eq!(level, ThreatLevel::Low);
    }

    #[test]
    fn drone_forced_high_and_medium() {
        assert_eq!(
            classify(DetectionKind::Drone, 0.75, "Sector 1", &mut rng_low()),
            ThreatLevel::High
        );
        assert_eq!(
            classify(DetectionKind::Drone, 0.75, "Sector 1", &mut rng_high()),
            ThreatLevel::Medium
        );
    }

    #[test]
    fn animal_is_always_low() {
        assert_eq!(
            classify(DetectionKind::Animal, 1.0, "Building A", &mut rng_low()),
            ThreatLevel::Low
        );
    }

    #[test]
    fn total_over_full_confidence_range() {
        // A real source may emit the whole [0, 1] range
        for confidence in [0.0, 0.5, 0.7, 1.0] {
            for kind in DetectionKind::ALL {
                classify(kind, confidence, "Zone B", &mut rng_low());
            }
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let first = {
            let mut rng = StdRng::seed_from_u64(42);
            classify(DetectionKind::Human, 0.9, "Building A", &mut rng)
        };
        for _ in 0..10 {
            let mut rng = StdRng::seed_from_u64(42);
            let level = classify(DetectionKind::Human, 0.9, "Building A", &mut rng);
            assert_eq!(level, first);
        }
    }

    #[test]
    fn high_sensitivity_lowers_human_gate() {
        let rules = ClassifierRules::high_sensitivity();
        let level = classify_with_rules(
            DetectionKind::Human,
            0.80,
            "Building A",
            &mut rng_low(),
            &rules,
        );
        assert_eq!(level, ThreatLevel::High);
    }
}
