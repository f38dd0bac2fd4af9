//! Error types for route table construction and application startup.

use thiserror::Error;

/// A route template or route tree that cannot be registered.
///
/// These are configuration errors: they surface while the route tree is
/// built at startup, never while a request is being labelled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTreeError {
    #[error("route template `{template}` must start with '/'")]
    MissingLeadingSlash { template: String },

    #[error("mount template `{template}` must not end with '/'")]
    MountTrailingSlash { template: String },

    #[error("mount template `{template}` cannot contain a path wildcard")]
    WildcardInMount { template: String },

    #[error("invalid placeholder `{segment}` in route template `{template}`")]
    InvalidPlaceholder { template: String, segment: String },

    #[error("unknown convertor `{convertor}` in route template `{template}`")]
    UnknownConvertor { template: String, convertor: String },

    #[error("duplicate parameter `{name}` in route template `{template}`")]
    DuplicateParameter { template: String, name: String },

    #[error("path wildcard `{name}` must be the last segment of `{template}`")]
    WildcardNotLast { template: String, name: String },
}

/// Errors that prevent the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteTreeError),

    #[error("failed to set up metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
}
