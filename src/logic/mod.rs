//! Logic Module - Detection Engines
//!
//! Contains the engines of the detection pipeline: Threat Classifier,
//! Feed Registry, Alert Manager, Stats Aggregator, Detection Source,
//! and the Dispatcher loop that sequences them.

pub mod error;
pub mod threat;
pub mod feeds;
pub mod alerts;
pub mod stats;
pub mod source;
pub mod dispatcher;
