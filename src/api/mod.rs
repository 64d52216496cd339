//! API Module - Operator Control Surface
//!
//! The only interface the excluded presentation layer talks to. Every
//! read accessor returns a committed snapshot, never a reference into
//! mutable engine internals.

pub mod control;

pub use control::{SystemController, SystemStatus};
