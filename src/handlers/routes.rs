//! Route templates of the service and the route tree built from them.
//!
//! The same templates are registered with actix-web (rendered through
//! [`resource_path`](crate::routing::resource_path)) and used as metrics
//! labels, so the two can not drift apart.

use crate::{errors::RouteTreeError, routing::RouteTree};

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const VERSION: &str = "/version";
pub const METRICS: &str = "/metrics";
pub const ITEMS: &str = "/items/";
pub const ITEM: &str = "/{id:int}";
pub const ITEM_EDIT: &str = "/{id:int}/edit";
pub const API: &str = "/api";
pub const API_ITEM: &str = "/{id:int}";
pub const API_USER: &str = "/users/{user_id:uuid}";
pub const OPENAPI_SPEC: &str = "/openapi/v2";

/// Route tree of the service, in actix-web registration order
pub fn app_route_tree() -> Result<RouteTree, RouteTreeError> {
    RouteTree::builder()
        .get(INDEX)
        .get(HEALTH)
        .get(VERSION)
        .get(METRICS)
        .get(ITEMS)
        .get(ITEM)
        .get(ITEM_EDIT)
        .mount(API, |api| api.get(API_ITEM).get(API_USER))
        .get(OPENAPI_SPEC)
        .build()
}
