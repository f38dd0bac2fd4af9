//! Route templates, the route tree, and request-to-label resolution.
//!
//! Metrics are labelled with the template a request was routed to
//! (`/items/{id:int}`) rather than the raw path (`/items/42`), which keeps
//! label cardinality bounded by the number of registered routes.

pub mod pattern;
pub mod resolver;
pub mod segment;
pub mod tree;

pub use pattern::{ChildScope, MatchOutcome, RequestScope, RoutePattern};
pub use resolver::{RouteResolver, resolve_route_name, resolve_with_trailing_slash};
pub use segment::{ParamKind, ParamValue, Params, Segment, Template, resource_path};
pub use tree::{RouteTree, RouteTreeBuilder};
