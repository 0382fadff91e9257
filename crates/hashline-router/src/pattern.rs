/// Pattern compilation and ordered route matching
///
/// Declared route patterns compile once, at registration, into anchored
/// regular expressions. Matching scans the compiled routes in declaration
/// order and the first full match wins; the reserved `default` key is looked
/// up by name, never scanned positionally.

use regex::Regex;
use tracing::trace;

use crate::error::{MatchError, PatternError};
use crate::params::{extract_params, ParamMap};

/// The reserved pattern key matched only when no other declared pattern
/// matches the current path
pub const DEFAULT_PATTERN: &str = "default";

/// How a parameter token captures path text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `:name` matches exactly one path segment
    Segment,
    /// `*name` matches greedily, possibly spanning several segments
    Spread,
}

/// A `:name` or `*name` token extracted from a pattern, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    pub name: String,
    pub kind: TokenKind,
}

/// A declared route pattern compiled into an anchored matcher
///
/// `payload` is the caller's opaque value, returned verbatim on match.
#[derive(Debug, Clone)]
pub struct CompiledRoute<T> {
    /// The pattern string as declared
    pub pattern: String,
    regex: Regex,
    tokens: Vec<ParamToken>,
    /// The value the caller associated with the pattern
    pub payload: T,
}

impl<T> CompiledRoute<T> {
    /// Parameter tokens in declaration order
    pub fn tokens(&self) -> &[ParamToken] {
        &self.tokens
    }
}

/// Result of matching a canonical path against a route table
#[derive(Debug)]
pub enum RouteMatch<'a, T> {
    /// A declared pattern matched the path; captures are already coerced
    Positional {
        route: &'a CompiledRoute<T>,
        params: ParamMap,
    },
    /// No declared pattern matched, but a `default` key is registered
    Fallback { route: &'a CompiledRoute<T> },
}

/// An ordered collection of compiled routes
///
/// Order is declaration order. Duplicate pattern keys resolve
/// last-declaration-wins for the payload while keeping the first
/// occurrence's position in the scan order.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    routes: Vec<CompiledRoute<T>>,
}

impl<T> RouteTable<T> {
    /// Compiles a set of `(pattern, payload)` declarations
    ///
    /// Fails fast on the first malformed pattern; nothing is registered in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashline_router::RouteTable;
    ///
    /// let table = RouteTable::compile(vec![
    ///     ("/item/:id", "item"),
    ///     ("default", "fallback"),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn compile<I, S>(definitions: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut routes: Vec<CompiledRoute<T>> = Vec::new();

        for (pattern, payload) in definitions {
            let pattern = pattern.into();
            let (regex, tokens) = compile_pattern(&pattern)?;
            trace!(pattern = %pattern, expression = %regex.as_str(), "compiled route pattern");

            let compiled = CompiledRoute {
                pattern,
                regex,
                tokens,
                payload,
            };
            match routes.iter_mut().find(|r| r.pattern == compiled.pattern) {
                // Last declaration wins, first occurrence keeps its position
                Some(existing) => *existing = compiled,
                None => routes.push(compiled),
            }
        }

        Ok(Self { routes })
    }

    /// Number of compiled routes, the `default` key included
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compiled routes in scan order
    pub fn routes(&self) -> &[CompiledRoute<T>] {
        &self.routes
    }

    /// The registered `default` route, if any
    pub fn default_route(&self) -> Option<&CompiledRoute<T>> {
        self.routes.iter().find(|r| r.pattern == DEFAULT_PATTERN)
    }

    /// Matches a canonical path against the table
    ///
    /// Scans declared patterns in declaration order; the first whose
    /// expression matches the whole path wins and its captures are extracted
    /// and coerced. When none match, falls back to the `default` key if one
    /// is registered. `Ok(None)` means the path is unhandled.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashline_router::{RouteMatch, RouteTable};
    ///
    /// let table = RouteTable::compile(vec![("/item/:id", ())]).unwrap();
    ///
    /// match table.lookup("/item/1").unwrap() {
    ///     Some(RouteMatch::Positional { route, params }) => {
    ///         assert_eq!(route.pattern, "/item/:id");
    ///         assert_eq!(params["id"], 1.0);
    ///     }
    ///     other => panic!("expected positional match, got {other:?}"),
    /// }
    /// assert!(table.lookup("/other").unwrap().is_none());
    /// ```
    pub fn lookup(&self, path: &str) -> Result<Option<RouteMatch<'_, T>>, MatchError> {
        for route in &self.routes {
            if route.pattern == DEFAULT_PATTERN {
                continue;
            }
            if let Some(captures) = route.regex.captures(path) {
                let params = extract_params(&route.pattern, &route.tokens, &captures)?;
                return Ok(Some(RouteMatch::Positional { route, params }));
            }
        }

        Ok(self
            .default_route()
            .map(|route| RouteMatch::Fallback { route }))
    }
}

/// Compiles one pattern string into its matcher and ordered token list
///
/// `:name` becomes a single-segment capture `([^/]+)`, `*name` a greedy
/// multi-segment capture `(\S+)`; literal spans are escaped verbatim. The
/// expression is anchored to the whole path and tolerates one trailing
/// separator.
fn compile_pattern(pattern: &str) -> Result<(Regex, Vec<ParamToken>), PatternError> {
    let mut tokens = Vec::new();
    let mut expression = String::from("^");
    let mut rest = pattern;

    while let Some(marker_pos) = rest.find([':', '*']) {
        let (literal, tail) = rest.split_at(marker_pos);
        expression.push_str(&regex::escape(literal));

        let kind = if tail.starts_with(':') {
            TokenKind::Segment
        } else {
            TokenKind::Spread
        };
        let tail = &tail[1..];
        let name_end = tail.find('/').unwrap_or(tail.len());
        let name = &tail[..name_end];
        if name.is_empty() {
            return Err(PatternError::DanglingToken {
                pattern: pattern.to_string(),
            });
        }

        expression.push_str(match kind {
            TokenKind::Segment => "([^/]+)",
            TokenKind::Spread => r"(\S+)",
        });
        tokens.push(ParamToken {
            name: name.to_string(),
            kind,
        });
        rest = &tail[name_end..];
    }

    expression.push_str(&regex::escape(rest));
    expression.push_str("/?$");

    let regex = Regex::new(&expression).map_err(|source| PatternError::Regex {
        pattern: pattern.to_string(),
        source,
    })?;

    // Group 0 is the whole match; every remaining group must belong to a token
    let captures = regex.captures_len() - 1;
    if captures != tokens.len() {
        return Err(PatternError::CaptureMismatch {
            pattern: pattern.to_string(),
            captures,
            tokens: tokens.len(),
        });
    }

    Ok((regex, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens_of(pattern: &str) -> Vec<ParamToken> {
        compile_pattern(pattern).unwrap().1
    }

    #[test]
    fn test_token_extraction_order() {
        assert_eq!(tokens_of("/about"), vec![]);
        assert_eq!(
            tokens_of("/item/:id/child/:childId"),
            vec![
                ParamToken {
                    name: "id".into(),
                    kind: TokenKind::Segment
                },
                ParamToken {
                    name: "childId".into(),
                    kind: TokenKind::Segment
                },
            ]
        );
        assert_eq!(
            tokens_of("/dashboard/:dashboardCategory/*params"),
            vec![
                ParamToken {
                    name: "dashboardCategory".into(),
                    kind: TokenKind::Segment
                },
                ParamToken {
                    name: "params".into(),
                    kind: TokenKind::Spread
                },
            ]
        );
    }

    #[test]
    fn test_segment_capture_excludes_separator() {
        let (regex, _) = compile_pattern("/item/:id").unwrap();
        assert!(regex.is_match("/item/1"));
        assert!(regex.is_match("/item/1/"));
        assert!(!regex.is_match("/item/1/child"));
        assert!(!regex.is_match("/item/"));
    }

    #[test]
    fn test_spread_capture_spans_segments() {
        let (regex, _) = compile_pattern("/*params").unwrap();
        let captures = regex.captures("/item/1/child/2").unwrap();
        assert_eq!(&captures[1], "item/1/child/2");
    }

    #[test]
    fn test_literal_spans_are_escaped() {
        let (regex, _) = compile_pattern("/v1.0/:id").unwrap();
        assert!(regex.is_match("/v1.0/7"));
        assert!(!regex.is_match("/v1x0/7"));
    }

    #[test]
    fn test_dangling_marker_fails_fast() {
        assert!(matches!(
            compile_pattern("/item/:"),
            Err(PatternError::DanglingToken { .. })
        ));
        assert!(matches!(
            compile_pattern("/item/*/x"),
            Err(PatternError::DanglingToken { .. })
        ));
    }

    #[test]
    fn test_duplicate_keys_last_wins_first_position() {
        let table = RouteTable::compile(vec![
            ("/about", "first"),
            ("/item/:id", "item"),
            ("/about", "second"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.routes()[0].pattern, "/about");
        assert_eq!(table.routes()[0].payload, "second");
    }

    #[test]
    fn test_first_declared_pattern_wins() {
        let table = RouteTable::compile(vec![("/item/:id", "narrow"), ("/*rest", "wide")]).unwrap();

        match table.lookup("/item/1").unwrap() {
            Some(RouteMatch::Positional { route, .. }) => assert_eq!(route.payload, "narrow"),
            other => panic!("expected positional match, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_not_scanned_positionally() {
        let table = RouteTable::compile(vec![("default", "fallback"), ("/about", "about")]).unwrap();

        // `/about` still reaches its own pattern even though `default` was
        // declared first
        match table.lookup("/about").unwrap() {
            Some(RouteMatch::Positional { route, .. }) => assert_eq!(route.payload, "about"),
            other => panic!("expected positional match, got {other:?}"),
        }

        match table.lookup("/missing").unwrap() {
            Some(RouteMatch::Fallback { route }) => assert_eq!(route.payload, "fallback"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_without_default_yields_none() {
        let table = RouteTable::compile(vec![("/about", ())]).unwrap();
        assert!(table.lookup("/missing").unwrap().is_none());
    }

    #[test]
    fn test_empty_table_lookup() {
        let table: RouteTable<()> = RouteTable::compile(Vec::<(String, ())>::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.lookup("/").unwrap().is_none());
    }

    #[test]
    fn test_odd_spread_is_a_match_error() {
        let table = RouteTable::compile(vec![("/*params", ())]).unwrap();
        assert!(matches!(
            table.lookup("/item/1/child"),
            Err(MatchError::OddSpread { .. })
        ));
    }
}
