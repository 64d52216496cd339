//! Feed Types
//!
//! Monitored input sources and their bounded recent-detection history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::FEED_HISTORY_CAP;
use crate::logic::threat::Detection;

// ============================================================================
// FEED KIND / STATUS
// ============================================================================

/// Kind of monitored input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedKind {
    #[serde(rename = "CCTV")]
    Cctv,
    Drone,
}

impl FeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Cctv => "CCTV",
            FeedKind::Drone => "Drone",
        }
    }
}

/// Whether a feed is currently monitored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedStatus {
    Active,
    Inactive,
}

// ============================================================================
// FEED
// ============================================================================

/// A monitored feed with identity, location, and bounded detection history.
/// Created once at registry initialization; never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    pub name: String,
    pub location: String,
    pub kind: FeedKind,
    pub status: FeedStatus,
    /// Arrival-ordered recent detections, oldest first, at most
    /// FEED_HISTORY_CAP entries
    pub detections: VecDeque<Detection>,
}

impl Feed {
    pub fn new(id: &str, name: &str, location: &str, kind: FeedKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            kind,
            status: FeedStatus::Active,
            detections: VecDeque::with_capacity(FEED_HISTORY_CAP),
        }
    }

    /// Append a detection, evicting the oldest entry once the buffer is
    /// full. The cap is enforced on every insert; the buffer never exceeds
    /// FEED_HISTORY_CAP even transiently.
    pub fn push_detection(&mut self, detection: Detection) {
        if self.detections.len() == FEED_HISTORY_CAP {
            self.detections.pop_front();
        }
        self.detections.push_back(detection);
    }
}

// ============================================================================
// DEFAULT ROSTER
// ============================================================================

/// The static site roster monitored at startup
pub fn default_feeds() -> Vec<Feed> {
    vec![
        Feed::new("feed1", "Main Entrance", "Building A", FeedKind::Cctv),
        Feed::new("feed2", "Parking Lot", "Zone B", FeedKind::Cctv),
        Feed::new("feed3", "Perimeter North", "Sector 1", FeedKind::Drone),
        Feed::new("feed4", "Warehouse", "Building C", FeedKind::Cctv),
    ]
}
