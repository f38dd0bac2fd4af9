//! Service layer modules.
//!
//! Metrics collection lives here; it is fed by the metrics middleware and
//! read by the `/metrics` handler.

pub mod metrics;

pub use metrics::*;
