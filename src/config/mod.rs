//! Configuration structures and loading utilities.
//!
//! Every configuration struct has a `Default` and a `from_env` constructor
//! that reads environment variables and falls back to those defaults.

pub mod metrics;
pub mod router;
pub mod telemetry;

pub use metrics::*;
pub use router::*;
pub use telemetry::*;
