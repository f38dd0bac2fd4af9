//! HTTP request handlers and the app factory.

pub mod health;
pub mod items;
pub mod metrics;
pub mod openapi;
pub mod redirect;
pub mod routes;
pub mod version;

pub use health::*;
pub use items::*;
pub use metrics::*;
pub use openapi::*;
pub use redirect::*;
pub use version::*;
