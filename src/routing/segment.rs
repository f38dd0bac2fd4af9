//! Route templates and the segment matchers they are made of.
//!
//! A template such as `/users/{user_id:uuid}/files/{rest:path}` is split on
//! `/` into segments. Every segment is either a literal, a typed parameter or
//! (last position only) a path wildcard that swallows the remainder of the
//! request path.

use crate::errors::RouteTreeError;
use regex::Regex;
use std::{collections::BTreeMap, fmt, sync::LazyLock};
use uuid::Uuid;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)(?::([A-Za-z_]+))?\}$")
        .expect("placeholder pattern is a valid regex")
});

/// Parameters captured while matching a request path, keyed by name.
pub type Params = BTreeMap<String, ParamValue>;

/// Convertor attached to a parameter placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
    Float,
    Uuid,
}

impl ParamKind {
    fn from_convertor(convertor: &str) -> Option<Self> {
        match convertor {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }

    /// Convert one raw path segment, or reject it.
    pub fn parse(self, raw: &str) -> Option<ParamValue> {
        if raw.is_empty() {
            return None;
        }

        match self {
            Self::Str => Some(ParamValue::Str(raw.to_string())),
            Self::Int => {
                if !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                raw.parse().ok().map(ParamValue::Int)
            }
            Self::Float => {
                let (whole, fraction) = match raw.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (raw, None),
                };
                let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
                if !digits(whole) || !fraction.is_none_or(digits) {
                    return None;
                }
                raw.parse().ok().map(ParamValue::Float)
            }
            Self::Uuid => {
                // Only the canonical lowercase hyphenated form is routable
                if raw.len() != 36 || raw.bytes().any(|b| b.is_ascii_uppercase()) {
                    return None;
                }
                Uuid::try_parse(raw).ok().map(ParamValue::Uuid)
            }
        }
    }

    /// Regex used when the segment is registered with actix-web.
    fn resource_regex(self) -> Option<&'static str> {
        match self {
            Self::Str => None,
            Self::Int => Some("[0-9]+"),
            Self::Float => Some(r"[0-9]+(?:\.[0-9]+)?"),
            Self::Uuid => Some("[0-9a-f]+-[0-9a-f]+-[0-9a-f]+-[0-9a-f]+-[0-9a-f]+"),
        }
    }
}

/// A typed value captured from the request path.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(u128),
    Float(f64),
    Uuid(Uuid),
    Path(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Path(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Uuid(id) => write!(f, "{id}"),
        }
    }
}

/// One `/`-separated piece of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param { name: String, kind: ParamKind },
    Wildcard { name: String },
}

impl Segment {
    fn parse(raw: &str, template: &str) -> Result<Self, RouteTreeError> {
        if !raw.contains(['{', '}']) {
            return Ok(Self::Literal(raw.to_string()));
        }

        let captures =
            PLACEHOLDER
                .captures(raw)
                .ok_or_else(|| RouteTreeError::InvalidPlaceholder {
                    template: template.to_string(),
                    segment: raw.to_string(),
                })?;
        let name = captures[1].to_string();

        match captures.get(2).map(|m| m.as_str()) {
            None => Ok(Self::Param {
                name,
                kind: ParamKind::Str,
            }),
            Some("path") => Ok(Self::Wildcard { name }),
            Some(convertor) => ParamKind::from_convertor(convertor)
                .map(|kind| Self::Param { name, kind })
                .ok_or_else(|| RouteTreeError::UnknownConvertor {
                    template: template.to_string(),
                    convertor: convertor.to_string(),
                }),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Param { name, .. } | Self::Wildcard { name } => Some(name),
        }
    }
}

/// How much of a path a template consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMatch<'p> {
    pub params: Params,
    /// Unconsumed remainder without its leading `/`, or `None` when the path
    /// was used up exactly.
    pub rest: Option<&'p str>,
}

/// A parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template. The empty template is accepted and has no segments;
    /// callers decide where it is legal.
    pub fn parse(raw: &str) -> Result<Self, RouteTreeError> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                segments: Vec::new(),
            });
        }

        let body = raw
            .strip_prefix('/')
            .ok_or_else(|| RouteTreeError::MissingLeadingSlash {
                template: raw.to_string(),
            })?;

        let segments = body
            .split('/')
            .map(|segment| Segment::parse(segment, raw))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen: Vec<&str> = Vec::new();
        for (index, segment) in segments.iter().enumerate() {
            if let Segment::Wildcard { name } = segment {
                if index + 1 != segments.len() {
                    return Err(RouteTreeError::WildcardNotLast {
                        template: raw.to_string(),
                        name: name.clone(),
                    });
                }
            }
            if let Some(name) = segment.name() {
                if seen.contains(&name) {
                    return Err(RouteTreeError::DuplicateParameter {
                        template: raw.to_string(),
                        name: name.to_string(),
                    });
                }
                seen.push(name);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard { .. }))
    }

    /// Match the leading segments of `path` against this template.
    ///
    /// `path` must start with `/`. Returns `None` as soon as a segment is
    /// rejected or the path runs out before the template does.
    pub fn match_segments<'p>(&self, path: &'p str) -> Option<SegmentMatch<'p>> {
        let mut rest = Some(path.strip_prefix('/')?);
        let mut params = Params::new();

        for segment in &self.segments {
            let current = rest?;

            if let Segment::Wildcard { name } = segment {
                params.insert(name.clone(), ParamValue::Path(current.to_string()));
                rest = None;
                continue;
            }

            let (head, tail) = match current.split_once('/') {
                Some((head, tail)) => (head, Some(tail)),
                None => (current, None),
            };

            match segment {
                Segment::Literal(literal) if literal == head => {}
                Segment::Param { name, kind } => {
                    params.insert(name.clone(), kind.parse(head)?);
                }
                _ => return None,
            }
            rest = tail;
        }

        Some(SegmentMatch { params, rest })
    }

    /// Render the template in actix-web resource syntax.
    pub fn resource_path(&self) -> String {
        if self.segments.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(self.raw.len() + 16);
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Param { name, kind } => match kind.resource_regex() {
                    Some(regex) => out.push_str(&format!("{{{name}:{regex}}}")),
                    None => out.push_str(&format!("{{{name}}}")),
                },
                Segment::Wildcard { name } => out.push_str(&format!("{{{name}:.*}}")),
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Render a template string in actix-web resource syntax.
///
/// Invalid templates are returned unchanged; building the route tree reports
/// them.
pub fn resource_path(template: &str) -> String {
    Template::parse(template)
        .map(|t| t.resource_path())
        .unwrap_or_else(|_| template.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_template() {
        let template = Template::parse("/users/{user_id:uuid}/files/{rest:path}").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("users".into()),
                Segment::Param {
                    name: "user_id".into(),
                    kind: ParamKind::Uuid
                },
                Segment::Literal("files".into()),
                Segment::Wildcard {
                    name: "rest".into()
                },
            ]
        );
        assert!(template.has_wildcard());
    }

    #[test]
    fn test_root_template_is_single_empty_literal() {
        let template = Template::parse("/").unwrap();
        assert_eq!(template.segments(), &[Segment::Literal(String::new())]);
        assert!(template.match_segments("/").unwrap().rest.is_none());
    }

    #[test]
    fn test_rejects_bad_templates() {
        assert!(matches!(
            Template::parse("items"),
            Err(RouteTreeError::MissingLeadingSlash { .. })
        ));
        assert!(matches!(
            Template::parse("/{id:hex}"),
            Err(RouteTreeError::UnknownConvertor { .. })
        ));
        assert!(matches!(
            Template::parse("/file-{name}"),
            Err(RouteTreeError::InvalidPlaceholder { .. })
        ));
        assert!(matches!(
            Template::parse("/{a}/{a:int}"),
            Err(RouteTreeError::DuplicateParameter { .. })
        ));
        assert!(matches!(
            Template::parse("/{rest:path}/tail"),
            Err(RouteTreeError::WildcardNotLast { .. })
        ));
    }

    #[test]
    fn test_int_param_only_accepts_digits() {
        assert_eq!(ParamKind::Int.parse("42"), Some(ParamValue::Int(42)));
        assert_eq!(ParamKind::Int.parse("-1"), None);
        assert_eq!(ParamKind::Int.parse("4a"), None);
        assert_eq!(ParamKind::Int.parse(""), None);
    }

    #[test]
    fn test_float_param() {
        assert_eq!(ParamKind::Float.parse("3.5"), Some(ParamValue::Float(3.5)));
        assert_eq!(ParamKind::Float.parse("7"), Some(ParamValue::Float(7.0)));
        assert_eq!(ParamKind::Float.parse("3."), None);
        assert_eq!(ParamKind::Float.parse(".5"), None);
        assert_eq!(ParamKind::Float.parse("1e3"), None);
    }

    #[test]
    fn test_uuid_param_requires_lowercase_hyphenated() {
        let id = "4f5accfe-45d2-43b1-bf10-fdad708732a8";
        assert!(matches!(ParamKind::Uuid.parse(id), Some(ParamValue::Uuid(_))));
        assert_eq!(ParamKind::Uuid.parse(&id.to_uppercase()), None);
        assert_eq!(ParamKind::Uuid.parse(&id.replace('-', "")), None);
    }

    #[test]
    fn test_match_segments_reports_remainder() {
        let template = Template::parse("/api").unwrap();
        let matched = template.match_segments("/api/42/edit").unwrap();
        assert_eq!(matched.rest, Some("42/edit"));

        assert_eq!(template.match_segments("/api").unwrap().rest, None);
        assert!(template.match_segments("/apis/1").is_none());
    }

    #[test]
    fn test_wildcard_takes_the_rest() {
        let template = Template::parse("/static/{file:path}").unwrap();

        let matched = template.match_segments("/static/css/site.css").unwrap();
        assert_eq!(
            matched.params.get("file"),
            Some(&ParamValue::Path("css/site.css".into()))
        );
        assert!(matched.rest.is_none());

        let empty = template.match_segments("/static/").unwrap();
        assert_eq!(empty.params.get("file"), Some(&ParamValue::Path(String::new())));

        assert!(template.match_segments("/static").is_none());
    }

    #[test]
    fn test_resource_path_rendering() {
        assert_eq!(resource_path("/{id:int}/edit"), "/{id:[0-9]+}/edit");
        assert_eq!(resource_path("/users/{name}"), "/users/{name}");
        assert_eq!(resource_path("/static/{file:path}"), "/static/{file:.*}");
        assert_eq!(resource_path("/items/"), "/items/");
        assert_eq!(resource_path("/"), "/");
        assert_eq!(resource_path(""), "");
    }
}
