//! Feed Registry
//!
//! Exclusive owner of the monitored feeds. Feeds are registered once at
//! construction and kept in registration order; the registry is the only
//! place feed state mutates.

use log::warn;

use super::types::{Feed, FeedStatus};
use crate::logic::error::EngineError;
use crate::logic::threat::Detection;

pub struct FeedRegistry {
    feeds: Vec<Feed>,
}

impl FeedRegistry {
    /// Build a registry from a roster. Duplicate ids keep the first
    /// registration; later ones are skipped with a diagnostic.
    pub fn new(roster: Vec<Feed>) -> Self {
        let mut feeds: Vec<Feed> = Vec::with_capacity(roster.len());
        for feed in roster {
            if feeds.iter().any(|f| f.id == feed.id) {
                warn!("duplicate feed id '{}' skipped at registration", feed.id);
                continue;
            }
            feeds.push(feed);
        }
        Self { feeds }
    }

    /// Append a detection to its feed's history, evicting the oldest entry
    /// once the buffer holds FEED_HISTORY_CAP detections. Fails with
    /// UnknownFeed when the detection references no registered feed; the
    /// caller drops the detection and continues.
    pub fn append_detection(&mut self, detection: Detection) -> Result<(), EngineError> {
        let feed = self
            .feeds
            .iter_mut()
            .find(|f| f.id == detection.feed_id)
            .ok_or_else(|| EngineError::UnknownFeed(detection.feed_id.clone()))?;
        feed.push_detection(detection);
        Ok(())
    }

    /// Set a feed's status. Idempotent; unknown ids fail.
    pub fn set_status(&mut self, feed_id: &str, status: FeedStatus) -> Result<(), EngineError> {
        let feed = self
            .feeds
            .iter_mut()
            .find(|f| f.id == feed_id)
            .ok_or_else(|| EngineError::UnknownFeed(feed_id.to_string()))?;
        feed.status = status;
        Ok(())
    }

    pub fn get(&self, feed_id: &str) -> Option<&Feed> {
        self.feeds.iter().find(|f| f.id == feed_id)
    }

    /// Feeds in registration order (stable, used for iteration and
    /// display binding)
    pub fn list(&self) -> &[Feed] {
        &self.feeds
    }
}

// ============================================================================
// TESTS
// ============================================================================
