use rustc_hash::FxHashSet;

use crate::errors::{ConfigError, NavigationError};
use crate::route::RouteParams;

/// Whether a route's path pattern captures parameters.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RouteType {
    Static,
    Dynamic,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern, e.g. `/students` or `/students/[id]`.
///
/// Literal segments must match exactly; `[param]` segments capture the
/// corresponding request segment under their key. Patterns and requested
/// paths are both normalized before comparison, so `/students/` and
/// `//students` match the `/students` pattern.
#[derive(Debug, Clone)]
pub(crate) struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Collapses consecutive slashes and trailing slashes, keeping the root `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

impl PathPattern {
    pub(crate) fn parse(raw_pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidPattern {
            path: raw_pattern.to_string(),
            reason: reason.to_string(),
        };

        if !raw_pattern.starts_with('/') {
            return Err(invalid("patterns must start with `/`"));
        }

        let raw = normalize_path(raw_pattern);
        let mut segments = Vec::new();
        let mut seen_keys = FxHashSet::default();

        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if part.starts_with('[') {
                if !part.ends_with(']') || part.len() < 3 {
                    return Err(invalid("malformed parameter segment"));
                }

                let key = &part[1..part.len() - 1];
                if key.contains('[') || key.contains(']') {
                    return Err(invalid("malformed parameter segment"));
                }

                if !seen_keys.insert(key.to_string()) {
                    return Err(invalid("parameter keys must be unique within a pattern"));
                }

                segments.push(Segment::Param(key.to_string()));
            } else if part.contains('[') || part.contains(']') {
                return Err(invalid(
                    "brackets are only allowed as a full `[param]` segment",
                ));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self { raw, segments })
    }

    /// The normalized pattern, used for duplicate-path detection and errors.
    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn route_type(&self) -> RouteType {
        if self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Param(_)))
        {
            RouteType::Dynamic
        } else {
            RouteType::Static
        }
    }

    /// Matches a requested path against this pattern, capturing parameters.
    pub(crate) fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = normalize_path(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();

        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(key) => {
                    params.insert(key.clone(), part.to_string());
                }
            }
        }

        Some(params)
    }

    /// Builds a concrete path from this pattern and the given parameters.
    pub(crate) fn fill(&self, params: &RouteParams) -> Result<String, NavigationError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(key) => {
                    let value =
                        params
                            .get(key)
                            .ok_or_else(|| NavigationError::MissingParameter {
                                path: self.raw.clone(),
                                param: key.clone(),
                            })?;
                    path.push_str(value);
                }
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/students/"), "/students");
        assert_eq!(normalize_path("//students//grades"), "/students/grades");
    }

    #[test]
    fn test_parse_static_pattern() {
        let pattern = PathPattern::parse("/students").unwrap();
        assert_eq!(pattern.route_type(), RouteType::Static);
        assert_eq!(pattern.raw(), "/students");
    }

    #[test]
    fn test_parse_dynamic_pattern() {
        let pattern = PathPattern::parse("/students/[id]").unwrap();
        assert_eq!(pattern.route_type(), RouteType::Dynamic);
    }

    #[test]
    fn test_parse_rejects_relative_pattern() {
        assert!(matches!(
            PathPattern::parse("students"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unclosed_bracket() {
        assert!(matches!(
            PathPattern::parse("/students/[id"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_param() {
        assert!(matches!(
            PathPattern::parse("/students/[]"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_param_keys() {
        assert!(matches!(
            PathPattern::parse("/[id]/grades/[id]"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_partial_bracket_segment() {
        assert!(matches!(
            PathPattern::parse("/students/[id]x"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_match_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/students").is_none());
    }

    #[test]
    fn test_match_static() {
        let pattern = PathPattern::parse("/students").unwrap();
        assert!(pattern.matches("/students").is_some());
        assert!(pattern.matches("/students/").is_some());
        assert!(pattern.matches("/teachers").is_none());
        assert!(pattern.matches("/students/42").is_none());
    }

    #[test]
    fn test_match_captures_params() {
        let pattern = PathPattern::parse("/students/[id]").unwrap();

        let params = pattern.matches("/students/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));

        assert!(pattern.matches("/students").is_none());
    }

    #[test]
    fn test_match_multiple_params() {
        let pattern = PathPattern::parse("/students/[id]/grades/[term]").unwrap();

        let params = pattern.matches("/students/42/grades/fall").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("term"), Some("fall"));
    }

    #[test]
    fn test_fill_static() {
        let pattern = PathPattern::parse("/students").unwrap();
        assert_eq!(pattern.fill(&RouteParams::default()).unwrap(), "/students");
    }

    #[test]
    fn test_fill_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.fill(&RouteParams::default()).unwrap(), "/");
    }

    #[test]
    fn test_fill_with_params() {
        let pattern = PathPattern::parse("/students/[id]").unwrap();
        let params = RouteParams::from_iter([("id", "42")]);

        assert_eq!(pattern.fill(&params).unwrap(), "/students/42");
    }

    #[test]
    fn test_fill_missing_param() {
        let pattern = PathPattern::parse("/students/[id]").unwrap();

        assert!(matches!(
            pattern.fill(&RouteParams::default()),
            Err(NavigationError::MissingParameter { .. })
        ));
    }
}
