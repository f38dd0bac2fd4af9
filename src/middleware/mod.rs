//! Custom middleware implementations for the API.

pub mod metrics;

pub use metrics::*;
