//! Recruitment pipeline board engine.
//!
//! Turns a flat list of candidate applications into per-stage buckets and
//! counters for a dashboard, optionally restricted to a daily, monthly, or
//! quarterly window.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::pipeline::{aggregate, normalize, PeriodSpec, PipelineAggregate, Stage};
