//! The ordered route table the resolver walks.

use super::pattern::RoutePattern;
use crate::errors::RouteTreeError;
use actix_web::http::Method;

/// Top-level route patterns in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
    routes: Vec<RoutePattern>,
}

impl RouteTree {
    pub fn new(routes: Vec<RoutePattern>) -> Self {
        Self { routes }
    }

    pub fn builder() -> RouteTreeBuilder {
        RouteTreeBuilder::default()
    }

    pub fn routes(&self) -> &[RoutePattern] {
        &self.routes
    }

    /// Number of patterns in the tree, nested ones included.
    pub fn len(&self) -> usize {
        fn count(routes: &[RoutePattern]) -> usize {
            routes
                .iter()
                .map(|route| 1 + route.children().map_or(0, count))
                .sum()
        }
        count(&self.routes)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects patterns in registration order, keeping the first error.
///
/// ```
/// use route_metrics::RouteTree;
///
/// let tree = RouteTree::builder()
///     .get("/")
///     .get("/{id:int}")
///     .mount("/api", |api| api.get("/{id:int}"))
///     .build()
///     .unwrap();
/// assert_eq!(tree.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct RouteTreeBuilder {
    routes: Vec<RoutePattern>,
    error: Option<RouteTreeError>,
}

impl RouteTreeBuilder {
    fn push(mut self, pattern: Result<RoutePattern, RouteTreeError>) -> Self {
        if self.error.is_none() {
            match pattern {
                Ok(pattern) => self.routes.push(pattern),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn route(self, template: &str, methods: &[Method]) -> Self {
        self.push(RoutePattern::route(template, Some(methods.to_vec())))
    }

    pub fn get(self, template: &str) -> Self {
        self.push(RoutePattern::get(template))
    }

    pub fn post(self, template: &str) -> Self {
        self.route(template, &[Method::POST])
    }

    pub fn any(self, template: &str) -> Self {
        self.push(RoutePattern::any(template))
    }

    /// Register a mount whose children are declared by `build`.
    pub fn mount<F>(self, template: &str, build: F) -> Self
    where
        F: FnOnce(RouteTreeBuilder) -> RouteTreeBuilder,
    {
        let pattern = build(RouteTreeBuilder::default())
            .build()
            .and_then(|children| RoutePattern::mount(template, children.routes));
        self.push(pattern)
    }

    pub fn pattern(self, pattern: RoutePattern) -> Self {
        self.push(Ok(pattern))
    }

    pub fn build(self) -> Result<RouteTree, RouteTreeError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(RouteTree::new(self.routes)),
        }
    }
}
