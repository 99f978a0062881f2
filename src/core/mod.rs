//! Core pipeline: scan, classify, format, reconcile, plan, execute.

pub mod classifier;
pub mod executor;
pub mod formatter;
pub mod planner;
pub mod reconciler;
pub mod scanner;
