//! Dual-stack address checker.
//!
//! Keeps the last known public address and a health status for each address family,
//! refreshing both on a fixed timer. Cycles are serialized: a timer tick that finds a
//! cycle in flight is skipped rather than queued.

pub mod constants;
pub mod health;
pub mod impls;
pub mod types;

pub use types::{Checker, FamilyReport, Snapshot, Status};
