//! Alert Manager
//!
//! Bounded, acknowledgment-aware alert queue. New alerts are prepended
//! (most-recent-first); once the queue exceeds ALERT_QUEUE_CAP the oldest
//! entry is dropped, acknowledged or not.

use std::collections::VecDeque;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use super::recommendations::recommendation_for;
use super::types::Alert;
use crate::constants::ALERT_QUEUE_CAP;
use crate::logic::error::EngineError;
use crate::logic::threat::Detection;

pub struct AlertManager {
    /// Newest first
    queue: VecDeque<Alert>,
}

impl AlertManager {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(ALERT_QUEUE_CAP),
        }
    }

    /// Build and enqueue an alert when the detection is Medium or High;
    /// no-op for Low. Returns the new alert's id when one was created.
    ///
    /// The alert embeds its own copy of the detection, so feed-history
    /// eviction never invalidates it.
    pub fn maybe_alert(&mut self, detection: &Detection, feed_name: &str) -> Option<Uuid> {
        let recommendation = recommendation_for(detection.kind, detection.threat_level)?;

        let alert = Alert {
            id: Uuid::new_v4(),
            detection: detection.clone(),
            message: format!(
                "{} threat detected: {} at {}",
                detection.threat_level, detection.kind, feed_name
            ),
            recommendation: recommendation.to_string(),
            acknowledged: false,
            timestamp: Utc::now(),
        };
        let id = alert.id;

        // Cap enforced on insert; the queue never exceeds the bound even
        // transiently
        if self.queue.len() == ALERT_QUEUE_CAP {
            if let Some(evicted) = self.queue.pop_back() {
                if !evicted.acknowledged {
                    warn!(
                        "alert queue full, evicting unacknowledged {} alert {}",
                        evicted.detection.threat_level, evicted.id
                    );
                }
            }
        }
        self.queue.push_front(alert);

        Some(id)
    }

    /// Mark an alert acknowledged. Idempotent; unknown ids report
    /// UnknownAlert with no side effects.
    pub fn acknowledge(&mut self, alert_id: Uuid) -> Result<(), EngineError> {
        let alert = self
            .queue
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or(EngineError::UnknownAlert(alert_id))?;
        alert.acknowledged = true;
        Ok(())
    }

    /// Unacknowledged alerts, most recent first
    pub fn list_unacknowledged(&self) -> Vec<Alert> {
        self.queue.iter().filter(|a| !a.acknowledged).cloned().collect()
    }

    /// All retained alerts, most recent first
    pub fn list_all(&self) -> Vec<Alert> {
        self.queue.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::threat::{BoundingBox, DetectionKind, ThreatLevel};

    fn detection(kind: DetectionKind, level: ThreatLevel) -> Detection {
        Detection {
            id: Uuid::new_v4(),
            kind,
            confidence: 0.9,
            position: BoundingBox { x: 10.0, y: 20.0, width: 50.0, height: 50.0 },
            timestamp: Utc::now(),
            threat_level: level,
            feed_id: "feed1".to_string(),
        }
    }

    #[test]
    fn medium_and_high_enqueue() {
        let mut manager = AlertManager::new();
        assert!(manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::Medium), "Main Entrance")
            .is_some());
        assert!(manager
            .maybe_alert(&detection(DetectionKind::Drone, ThreatLevel::High), "Perimeter North")
            .is_some());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn low_is_a_no_op() {
        let mut manager = AlertManager::new();
        let id = manager.maybe_alert(&detection(DetectionKind::Vehicle, ThreatLevel::Low), "Parking Lot");
        assert!(id.is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn message_is_templated() {
        let mut manager = AlertManager::new();
        manager.maybe_alert(&detection(DetectionKind::Human, ThreatLevel::High), "Main Entrance");
        let alerts = manager.list_all();
        assert_eq!(alerts[0].message, "High threat detected: human at Main Entrance");
        assert_eq!(
            alerts[0].recommendation,
            "Dispatch security personnel immediately. Verify identity and intent."
        );
    }

    #[test]
    fn newest_first_ordering() {
        let mut manager = AlertManager::new();
        let first = manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::Medium), "Main Entrance")
            .unwrap();
        let second = manager
            .maybe_alert(&detection(DetectionKind::Drone, ThreatLevel::High), "Perimeter North")
            .unwrap();

        let alerts = manager.list_all();
        assert_eq!(alerts[0].id, second);
        assert_eq!(alerts[1].id, first);
    }

    #[test]
    fn queue_caps_at_ten_oldest_evicted() {
        let mut manager = AlertManager::new();
        let mut ids = Vec::new();
        for _ in 0..11 {
            let id = manager
                .maybe_alert(&detection(DetectionKind::Drone, ThreatLevel::High), "Perimeter North")
                .unwrap();
            ids.push(id);
        }

        assert_eq!(manager.len(), ALERT_QUEUE_CAP);
        let retained: Vec<Uuid> = manager.list_all().iter().map(|a| a.id).collect();
        // The very first alert is gone, the other ten remain newest-first
        assert!(!retained.contains(&ids[0]));
        let expected: Vec<Uuid> = ids[1..].iter().rev().copied().collect();
        assert_eq!(retained, expected);
    }

    #[test]
    fn eviction_ignores_acknowledgment() {
        let mut manager = AlertManager::new();
        let oldest = manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::High), "Main Entrance")
            .unwrap();
        manager.acknowledge(oldest).unwrap();

        for _ in 0..ALERT_QUEUE_CAP {
            manager.maybe_alert(&detection(DetectionKind::Drone, ThreatLevel::Medium), "Perimeter North");
        }

        // Acknowledged or not, the oldest entry is evicted at the cap
        assert_eq!(manager.len(), ALERT_QUEUE_CAP);
        assert!(manager.list_all().iter().all(|a| a.id != oldest));
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let mut manager = AlertManager::new();
        let id = manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::Medium), "Main Entrance")
            .unwrap();

        manager.acknowledge(id).unwrap();
        manager.acknowledge(id).unwrap();

        let alerts = manager.list_all();
        assert!(alerts[0].acknowledged);
        assert!(manager.list_unacknowledged().is_empty());
    }

    #[test]
    fn acknowledge_unknown_id_changes_nothing() {
        let mut manager = AlertManager::new();
        manager.maybe_alert(&detection(DetectionKind::Human, ThreatLevel::Medium), "Main Entrance");
        let before = manager.list_all();

        let missing = Uuid::new_v4();
        let err = manager.acknowledge(missing).unwrap_err();
        assert_eq!(err, EngineError::UnknownAlert(missing));

        let after = manager.list_all();
        assert_eq!(before.len(), after.len());
        assert!(before
            .iter()
            .zip(after.iter())
            .all(|(b, a)| b.id == a.id && b.acknowledged == a.acknowledged));
    }

    #[test]
    fn unacknowledged_filter_preserves_order() {
        let mut manager = AlertManager::new();
        let first = manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::Medium), "Main Entrance")
            .unwrap();
        let second = manager
            .maybe_alert(&detection(DetectionKind::Drone, ThreatLevel::High), "Perimeter North")
            .unwrap();
        let third = manager
            .maybe_alert(&detection(DetectionKind::Human, ThreatLevel::High), "Warehouse")
            .unwrap();
        manager.acknowledge(second).unwrap();

        let open: Vec<Uuid> = manager.list_unacknowledged().iter().map(|a| a.id).collect();
        assert_eq!(open, vec![third, first]);
    }
}
