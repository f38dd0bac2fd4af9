//! Fallback for requests no registered resource matched.

use crate::routing::RouteResolver;
use actix_web::{HttpRequest, HttpResponse, http::header, web};

/// Default service of the app
///
/// Redirects to the trailing-slash twin of the path when the router is set to
/// redirect slashes and only the twin has a route. Everything else is a 404.
pub async fn redirect_trailing_slash(
    req: HttpRequest,
    resolver: Option<web::Data<RouteResolver>>,
) -> HttpResponse {
    let target = resolver.and_then(|r| r.slash_redirect(req.method(), req.path()));

    match target {
        Some(mut location) => {
            if !req.query_string().is_empty() {
                location.push('?');
                location.push_str(req.query_string());
            }
            tracing::debug!(from = %req.path(), to = %location, "Redirecting trailing slash");
            HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish()
        }
        None => HttpResponse::NotFound().finish(),
    }
}
