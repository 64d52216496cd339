//! AI Intrusion Detection System - Core Engine
//!
//! Real-time threat-detection and alerting core for a multi-feed
//! surveillance network. Consumes abstract detection events, classifies
//! their threat level, keeps bounded per-feed detection history, maintains
//! an acknowledgment-aware alert queue, and aggregates rolling statistics.
//!
//! The rendering layer and the actual vision pipeline live elsewhere; this
//! crate is the in-process classification/alerting/state engine only.

pub mod api;
pub mod constants;
pub mod logic;

pub use api::control::SystemController;
