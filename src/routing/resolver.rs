//! Route-name resolution: request path to the registered route template.
//!
//! The walk follows the router's own precedence. The first pattern that
//! matches fully decides the outcome, including a mount whose children then
//! reject the remainder. A partial match (right shape, wrong method) is only
//! remembered as a fallback while the scan goes on.

use super::{
    pattern::{MatchOutcome, RequestScope, RoutePattern},
    tree::RouteTree,
};
use crate::config::{RouterConfig, SlashLabel};
use actix_web::http::Method;

/// Resolve the route label for `scope` against `routes`.
///
/// Returns `None` when nothing matches, or when the first full match is a
/// mount whose children reject the rest of the path.
pub fn resolve_route_name(scope: &RequestScope, routes: &[RoutePattern]) -> Option<String> {
    let mut fallback: Option<&str> = None;

    for route in routes {
        let (outcome, child) = route.matches(scope);
        match outcome {
            MatchOutcome::Full => {
                let children = route.children().filter(|c| !c.is_empty());
                let Some(children) = children else {
                    return Some(route.template().to_string());
                };
                let child_scope = scope.merge(child);
                return resolve_route_name(&child_scope, children)
                    .map(|child_label| format!("{}{}", route.template(), child_label));
            }
            MatchOutcome::Partial if fallback.is_none() => fallback = Some(route.template()),
            MatchOutcome::Partial | MatchOutcome::None => {}
        }
    }

    fallback.map(str::to_string)
}

/// [`resolve_route_name`] plus the router's trailing-slash redirect.
///
/// When the path has no label of its own and the router would redirect it to
/// its trailing-slash twin, the twin's label is reported instead, reshaped by
/// `slash_label`. The root path is never retried.
pub fn resolve_with_trailing_slash(
    scope: &RequestScope,
    routes: &[RoutePattern],
    redirect_slashes: bool,
    slash_label: SlashLabel,
) -> Option<String> {
    if let Some(label) = resolve_route_name(scope, routes) {
        return Some(label);
    }
    if !redirect_slashes || scope.path == "/" {
        return None;
    }

    let (toggled, appended) = toggle_trailing_slash(&scope.path);
    resolve_route_name(&scope.with_path(toggled), routes)
        .map(|label| slash_label.apply(label, appended))
}

/// `path` with its trailing slash removed or added, and whether it was added.
fn toggle_trailing_slash(path: &str) -> (String, bool) {
    match path.strip_suffix('/') {
        Some(stripped) => (stripped.to_string(), false),
        None => (format!("{path}/"), true),
    }
}

/// Route tree plus the router settings needed to label requests.
///
/// Shared read-only between workers; resolution never mutates it.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    tree: RouteTree,
    redirect_slashes: bool,
    slash_label: SlashLabel,
}

impl RouteResolver {
    pub fn new(tree: RouteTree, config: &RouterConfig) -> Self {
        tracing::info!(
            patterns = tree.len(),
            redirect_slashes = config.redirect_slashes,
            slash_label = ?config.slash_label,
            "Route resolver ready"
        );

        Self {
            tree,
            redirect_slashes: config.redirect_slashes,
            slash_label: config.slash_label,
        }
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    /// Path the router redirects `path` to, if any.
    ///
    /// Mirrors the retry in [`resolve_with_trailing_slash`]: only a path with
    /// no route of its own whose trailing-slash twin has one is redirected.
    pub fn slash_redirect(&self, method: &Method, path: &str) -> Option<String> {
        if !self.redirect_slashes || path == "/" {
            return None;
        }
        let scope = RequestScope::new(method.clone(), path);
        if resolve_route_name(&scope, self.tree.routes()).is_some() {
            return None;
        }

        let (toggled, _) = toggle_trailing_slash(path);
        resolve_route_name(&scope.with_path(toggled.clone()), self.tree.routes())
            .map(|_| toggled)
    }

    /// Label for `method` + `path`, or `None` if the path is unroutable.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<String> {
        self.resolve_scope(&RequestScope::new(method.clone(), path))
    }

    pub fn resolve_scope(&self, scope: &RequestScope) -> Option<String> {
        resolve_with_trailing_slash(
            scope,
            self.tree.routes(),
            self.redirect_slashes,
            self.slash_label,
        )
    }
}
