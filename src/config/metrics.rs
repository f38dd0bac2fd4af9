//! Metrics configuration.

use std::env;

/// Configuration for application metrics collection
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route labels that are never recorded
    pub excluded_routes: Vec<String>,
    /// Fixed label for requests no route matches. When unset the raw request
    /// path is used.
    pub unmatched_label: Option<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            excluded_routes: vec!["/metrics".to_string()],
            unmatched_label: None,
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let excluded_routes = env::var("METRICS_EXCLUDED_ROUTES")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|_| vec!["/metrics".to_string()]);

        let unmatched_label = env::var("METRICS_UNMATCHED_LABEL")
            .ok()
            .filter(|v| !v.is_empty());

        Self {
            enabled,
            excluded_routes,
            unmatched_label,
        }
    }

    /// Label recorded for a request whose route could not be resolved
    pub fn label_for_unmatched(&self, path: &str) -> String {
        self.unmatched_label
            .clone()
            .unwrap_or_else(|| path.to_string())
    }
}
