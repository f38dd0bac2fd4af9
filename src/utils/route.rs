//! Route label extraction for requests.

use crate::{config::MetricsConfig, routing::RouteResolver};
use actix_web::{HttpRequest, web};

/// Extract the route label metrics are recorded under
///
/// Uses the registered [`RouteResolver`] when the app provides one, then
/// actix-web's own resource map. Requests nothing matches get the label
/// chosen by [`MetricsConfig::label_for_unmatched`] (the raw path unless
/// configured otherwise).
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    let path = req.path();

    let resolved = match req.app_data::<web::Data<RouteResolver>>() {
        Some(resolver) => resolver.resolve(req.method(), path),
        None => req.match_pattern(),
    };

    resolved.unwrap_or_else(|| {
        tracing::trace!(target: "metrics", path = %path, "No route matched request");
        match req.app_data::<web::Data<MetricsConfig>>() {
            Some(config) => config.label_for_unmatched(path),
            None => path.to_string(),
        }
    })
}
