//! Registered route patterns and how a single pattern matches a request.

use super::segment::{Params, Template};
use crate::errors::RouteTreeError;
use actix_web::http::Method;

/// Result of matching one pattern against a request scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern accepts the request (mounts: the prefix matched and the
    /// remainder is handed to the children).
    Full,
    /// The path shape matches but the pattern will not serve the request,
    /// e.g. the method is not allowed.
    Partial,
    None,
}

/// The per-request view used while walking the route tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestScope {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

impl RequestScope {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
        }
    }

    /// Same request, different path. Used for the trailing-slash retry.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            method: self.method.clone(),
            path: path.into(),
            params: self.params.clone(),
        }
    }

    /// Scope seen by a mount's children: captured parameters merged over the
    /// parent's, path replaced by the residual when there is one.
    pub fn merge(&self, child: ChildScope) -> Self {
        let mut params = self.params.clone();
        params.extend(child.params);
        Self {
            method: self.method.clone(),
            path: child.path.unwrap_or_else(|| self.path.clone()),
            params,
        }
    }
}

/// What a match contributes to the scope of the next level down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildScope {
    pub params: Params,
    /// Residual path for mounts, always starting with `/`.
    pub path: Option<String>,
}

#[derive(Debug, Clone)]
enum PatternKind {
    Route { methods: Option<Vec<Method>> },
    Mount { routes: Vec<RoutePattern> },
}

/// A node of the route tree: an endpoint route or a mount.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    template: Template,
    kind: PatternKind,
}

impl RoutePattern {
    /// Endpoint route restricted to `methods`. `None` accepts every method.
    pub fn route(template: &str, methods: Option<Vec<Method>>) -> Result<Self, RouteTreeError> {
        let parsed = Template::parse(template)?;
        if template.is_empty() {
            return Err(RouteTreeError::MissingLeadingSlash {
                template: template.to_string(),
            });
        }

        let methods = methods.map(|mut methods| {
            if methods.contains(&Method::GET) && !methods.contains(&Method::HEAD) {
                methods.push(Method::HEAD);
            }
            methods
        });

        Ok(Self {
            template: parsed,
            kind: PatternKind::Route { methods },
        })
    }

    pub fn get(template: &str) -> Result<Self, RouteTreeError> {
        Self::route(template, Some(vec![Method::GET]))
    }

    pub fn any(template: &str) -> Result<Self, RouteTreeError> {
        Self::route(template, None)
    }

    /// Mount delegating everything below `template` to `routes`.
    ///
    /// An empty `routes` list stands for an opaque mounted application and is
    /// labelled with the mount template itself.
    pub fn mount(template: &str, routes: Vec<RoutePattern>) -> Result<Self, RouteTreeError> {
        if template.ends_with('/') {
            return Err(RouteTreeError::MountTrailingSlash {
                template: template.to_string(),
            });
        }

        let parsed = Template::parse(template)?;
        if parsed.has_wildcard() {
            return Err(RouteTreeError::WildcardInMount {
                template: template.to_string(),
            });
        }

        Ok(Self {
            template: parsed,
            kind: PatternKind::Mount { routes },
        })
    }

    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    /// Child routes of a mount; `None` for endpoint routes.
    pub fn children(&self) -> Option<&[RoutePattern]> {
        match &self.kind {
            PatternKind::Mount { routes } => Some(routes),
            PatternKind::Route { .. } => None,
        }
    }

    pub fn methods(&self) -> Option<&[Method]> {
        match &self.kind {
            PatternKind::Route { methods } => methods.as_deref(),
            PatternKind::Mount { .. } => None,
        }
    }

    /// Match this pattern against `scope`.
    pub fn matches(&self, scope: &RequestScope) -> (MatchOutcome, ChildScope) {
        let Some(matched) = self.template.match_segments(&scope.path) else {
            return (MatchOutcome::None, ChildScope::default());
        };

        match &self.kind {
            PatternKind::Route { methods } => {
                if matched.rest.is_some() {
                    return (MatchOutcome::None, ChildScope::default());
                }
                let child = ChildScope {
                    params: matched.params,
                    path: None,
                };
                match methods {
                    Some(methods) if !methods.contains(&scope.method) => {
                        (MatchOutcome::Partial, child)
                    }
                    _ => (MatchOutcome::Full, child),
                }
            }
            PatternKind::Mount { .. } => match matched.rest {
                Some(rest) => (
                    MatchOutcome::Full,
                    ChildScope {
                        params: matched.params,
                        path: Some(format!("/{rest}")),
                    },
                ),
                None => (MatchOutcome::None, ChildScope::default()),
            },
        }
    }
}
