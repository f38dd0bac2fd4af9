//! Route Metrics - per-route request metrics for Actix Web services
//!
//! Latency and count metrics are only useful when they aggregate per logical
//! endpoint. This crate labels every request with the route template it was
//! routed to (`/{id:int}/edit`) instead of the concrete path (`/42/edit`):
//! - Route templates with literal, typed-parameter and wildcard segments
//! - Nested mounts whose labels concatenate parent and child templates
//! - The router's trailing-slash redirect folded into a single label
//! - Prometheus metrics recorded by an Actix Web middleware
//!
//! ## Architecture
//!
//! - `routing/` - Route templates, the route tree, and label resolution
//! - `middleware/` - Metrics middleware recording one observation per request
//! - `services/` - Prometheus registry and recording
//! - `handlers/` - HTTP handlers, route table, and app factory
//! - `config/` - Configuration structures and environment loading
//! - `bench` - Connection latency probes used by the `conn-bench` binary
//!
//! ## Quick Start
//!
//! ```
//! use actix_web::http::Method;
//! use route_metrics::{RouteResolver, RouteTree, RouterConfig};
//!
//! let tree = RouteTree::builder()
//!     .get("/")
//!     .get("/{id:int}")
//!     .mount("/api", |api| api.get("/{id:int}"))
//!     .build()
//!     .unwrap();
//! let resolver = RouteResolver::new(tree, &RouterConfig::default());
//!
//! assert_eq!(resolver.resolve(&Method::GET, "/api/42").as_deref(), Some("/api/{id:int}"));
//! assert_eq!(resolver.resolve(&Method::GET, "/nope/1"), None);
//! ```

pub mod bench;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routing;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{LogFormat, MetricsConfig, RouterConfig, SlashLabel, TelemetryConfig};
pub use errors::{AppError, RouteTreeError};
pub use handlers::{
    AppState, create_app, create_base_app, create_openapi_spec, get_metrics, health,
    routes::app_route_tree, version,
};
pub use middleware::{MetricsMiddleware, MetricsService};
pub use models::{HealthResponse, ItemListResponse, ItemResponse, UserResponse, VersionResponse};
pub use routing::{
    MatchOutcome, RequestScope, RoutePattern, RouteResolver, RouteTree, resolve_route_name,
    resolve_with_trailing_slash,
};
pub use services::AppMetrics;
pub use utils::extract_route_pattern;
