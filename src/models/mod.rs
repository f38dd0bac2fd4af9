//! Request and response models.

pub mod api;

pub use api::*;
