//! Path patterns and location parsing.

use std::collections::BTreeMap;

use crate::RouterError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A route path such as `/courses/:id/manage`.
///
/// Static segments match case-insensitively, `:name` segments bind one
/// non-empty path segment, and one trailing slash is ignored. Parameter
/// values escape `%`, `/`, `?` and `#` when built into a path and are
/// unescaped when matched back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:param` segments, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a path (no query or fragment) and bind its parameters
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode_param(part));
                }
            }
        }
        Some(params)
    }

    /// Fill the pattern's parameters to build a concrete path
    pub fn build(&self, params: &Params) -> Result<String, RouterError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouterError::MissingParam {
                            route: self.raw.clone(),
                            param: name.clone(),
                        })?;
                    path.push_str(&encode_param(value));
                }
            }
        }
        Ok(path)
    }
}

/// Characters that would end a path segment or start a query, fragment or escape
const RESERVED: [(char, &str); 4] = [('%', "%25"), ('/', "%2F"), ('?', "%3F"), ('#', "%23")];

fn encode_param(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match RESERVED.iter().find(|(reserved, _)| *reserved == c) {
            Some((_, escape)) => encoded.push_str(escape),
            None => encoded.push(c),
        }
    }
    encoded
}

/// Undo [`encode_param`]; any other `%` sequence is kept as written
fn decode_param(segment: &str) -> String {
    let mut decoded = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(pos) = rest.find('%') {
        decoded.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let escape = tail.get(..3).and_then(|head| {
            RESERVED
                .iter()
                .find(|(_, escape)| escape.eq_ignore_ascii_case(head))
        });
        match escape {
            Some((c, _)) => {
                decoded.push(*c);
                rest = &tail[3..];
            }
            None => {
                decoded.push('%');
                rest = &tail[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

/// Bound route parameters, e.g. `id -> "42"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A navigation target split into path, query and fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    /// Raw fragment without the leading `#`
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (before_hash, hash) = match raw.split_once('#') {
            Some((before, hash)) => (before, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match before_hash.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (before_hash, None),
        };
        let path = if path.is_empty() { "/" } else { path };

        Self {
            path: path.to_string(),
            query: query.filter(|q| !q.is_empty()),
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// `key=value` pairs of the query string, undecoded
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        query_pairs(self.query.as_deref())
    }

    /// Path plus query and fragment
    pub fn full_path(&self) -> String {
        full_path(&self.path, self.query.as_deref(), self.hash.as_deref())
    }
}

pub(crate) fn full_path(path: &str, query: Option<&str>, hash: Option<&str>) -> String {
    let mut full = path.to_string();
    if let Some(query) = query {
        full.push('?');
        full.push_str(query);
    }
    if let Some(hash) = hash {
        full.push('#');
        full.push_str(hash);
    }
    full
}

pub(crate) fn query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_match() {
        let pattern = PathPattern::parse("/courses");
        assert!(pattern.matches("/courses").is_some());
        assert!(pattern.matches("/courses/").is_some());
        assert!(pattern.matches("/Courses").is_some());
        assert!(pattern.matches("/courses/1").is_none());
        assert!(pattern.matches("courses").is_none());
    }

    #[test]
    fn test_root_pattern() {
        let root = PathPattern::parse("/");
        assert!(root.matches("/").unwrap().is_empty());
        assert!(root.matches("/dashboard").is_none());
    }

    #[test]
    fn test_param_binding() {
        let pattern = PathPattern::parse("/courses/:id/manage");
        let params = pattern.matches("/courses/abc-123/manage").unwrap();
        assert_eq!(params.get("id"), Some("abc-123"));
        assert!(pattern.matches("/courses//manage").is_none());
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_param_value_is_not_lowercased() {
        let pattern = PathPattern::parse("/courses/:id");
        let params = pattern.matches("/COURSES/AbC").unwrap();
        assert_eq!(params.get("id"), Some("AbC"));
    }

    #[test]
    fn test_build_path() {
        let pattern = PathPattern::parse("/courses/:id/manage");
        let params: Params = [("id", "42")].into_iter().collect();
        assert_eq!(pattern.build(&params).unwrap(), "/courses/42/manage");
        assert!(matches!(
            pattern.build(&Params::default()),
            Err(RouterError::MissingParam { .. })
        ));
        assert_eq!(PathPattern::parse("/").build(&Params::default()).unwrap(), "/");
    }

    #[test]
    fn test_reserved_characters_stay_inside_the_param() {
        let pattern = PathPattern::parse("/courses/:id");
        let params: Params = [("id", "5/manage?tab=x#top 100%")].into_iter().collect();

        let path = pattern.build(&params).unwrap();
        assert_eq!(path, "/courses/5%2Fmanage%3Ftab=x%23top 100%25");
        assert_eq!(pattern.matches(&path).unwrap(), params);
    }

    #[test]
    fn test_unknown_escapes_are_kept() {
        let pattern = PathPattern::parse("/courses/:id");
        let params = pattern.matches("/courses/a%20b%2fc%").unwrap();
        assert_eq!(params.get("id"), Some("a%20b/c%"));
    }

    #[test]
    fn test_location_parse() {
        let location = Location::parse("/courses/7?tab=materials&x#top");
        assert_eq!(location.path, "/courses/7");
        assert_eq!(location.query.as_deref(), Some("tab=materials&x"));
        assert_eq!(location.hash.as_deref(), Some("top"));
        assert_eq!(
            location.query_pairs(),
            vec![
                ("tab".to_string(), "materials".to_string()),
                ("x".to_string(), String::new())
            ]
        );
        assert_eq!(location.full_path(), "/courses/7?tab=materials&x#top");
    }

    #[test]
    fn test_location_defaults() {
        let location = Location::parse("?#");
        assert_eq!(location.path, "/");
        assert_eq!(location.query, None);
        assert_eq!(location.hash, None);
    }
}
