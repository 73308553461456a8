//! The EvergreenOS OS image PRD as data.
//!
//! Everything here is constant construction plus pure comparison; nothing reads
//! the filesystem.

#![forbid(unsafe_code)]

mod metrics;
mod registry;

pub use metrics::MetricThreshold;
pub use registry::{EvergreenOsPrd, LayoutExpectation};
