//! Router behaviour the route labeller has to mirror.

use std::{env, str::FromStr};

/// How a label found through the trailing-slash retry is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlashLabel {
    /// Report the template that matched the toggled path as registered, so
    /// `/items` and `/items/` share one label.
    #[default]
    Canonical,
    /// Toggle the slash back on the matched label so it keeps the shape of
    /// the requested path.
    Requested,
}

impl SlashLabel {
    /// Turn the label matched for the toggled path into the reported label.
    ///
    /// `appended` is true when the retry added a trailing slash to the
    /// requested path, false when it stripped one.
    pub fn apply(self, label: String, appended: bool) -> String {
        match self {
            Self::Canonical => label,
            Self::Requested if label == "/" => label,
            Self::Requested if appended => match label.strip_suffix('/') {
                Some(trimmed) => trimmed.to_string(),
                None => label,
            },
            Self::Requested => {
                if label.ends_with('/') {
                    label
                } else {
                    label + "/"
                }
            }
        }
    }
}

impl FromStr for SlashLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "requested" => Ok(Self::Requested),
            other => Err(format!("unknown trailing-slash label policy: {other}")),
        }
    }
}

/// Configuration for route resolution
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Whether the router redirects between `/path` and `/path/`
    pub redirect_slashes: bool,
    pub slash_label: SlashLabel,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            redirect_slashes: true,
            slash_label: SlashLabel::default(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let redirect_slashes = env::var("ROUTER_REDIRECT_SLASHES")
            .ok()
            .and_then(|v| match v.trim().parse::<bool>() {
                Ok(flag) => Some(flag),
                Err(e) => {
                    tracing::warn!(error = %e, value = %v, "Ignoring ROUTER_REDIRECT_SLASHES");
                    None
                }
            })
            .unwrap_or(true);

        let slash_label = env::var("ROUTER_SLASH_LABEL")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring ROUTER_SLASH_LABEL");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            redirect_slashes,
            slash_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keeps_label() {
        assert_eq!(SlashLabel::Canonical.apply("/items/".into(), true), "/items/");
        assert_eq!(SlashLabel::Canonical.apply("/items".into(), false), "/items");
    }

    #[test]
    fn test_requested_toggles_back() {
        assert_eq!(SlashLabel::Requested.apply("/items/".into(), true), "/items");
        assert_eq!(SlashLabel::Requested.apply("/items".into(), false), "/items/");
    }

    #[test]
    fn test_requested_leaves_root_alone() {
        assert_eq!(SlashLabel::Requested.apply("/".into(), true), "/");
        assert_eq!(SlashLabel::Requested.apply("/".into(), false), "/");
    }

    #[test]
    fn test_requested_never_doubles_slash() {
        assert_eq!(SlashLabel::Requested.apply("/api/".into(), false), "/api/");
    }

    #[test]
    fn test_config_from_env() {
        unsafe {
            env::set_var("ROUTER_REDIRECT_SLASHES", "sometimes");
            env::set_var("ROUTER_SLASH_LABEL", "requested");
        }
        let config = RouterConfig::from_env();
        assert!(config.redirect_slashes, "invalid flag falls back to the default");
        assert_eq!(config.slash_label, SlashLabel::Requested);

        unsafe {
            env::set_var("ROUTER_REDIRECT_SLASHES", " false ");
        }
        assert!(!RouterConfig::from_env().redirect_slashes);

        unsafe {
            env::remove_var("ROUTER_REDIRECT_SLASHES");
            env::remove_var("ROUTER_SLASH_LABEL");
        }
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("canonical".parse::<SlashLabel>(), Ok(SlashLabel::Canonical));
        assert_eq!(" Requested ".parse::<SlashLabel>(), Ok(SlashLabel::Requested));
        assert!("sometimes".parse::<SlashLabel>().is_err());
    }
}
