//! Feeds Module
//!
//! Owns the monitored camera/drone feeds and their bounded detection
//! history.
//!
//! ## Structure
//! - `types`: Feed, FeedKind, FeedStatus + the default roster
//! - `registry`: FeedRegistry operations

pub mod types;
pub mod registry;

pub use types::{default_feeds, Feed, FeedKind, FeedStatus};
pub use registry::FeedRegistry;
