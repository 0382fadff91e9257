/// Parameter coercion and wildcard-spread decomposition
///
/// Pure functions mapping captured path text to typed parameter values.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MatchError;
use crate::pattern::{ParamToken, TokenKind};

/// Extracted route parameters, keyed by parameter name
pub type ParamMap = HashMap<String, ParamValue>;

/// A coerced route parameter: numeric text becomes a number, everything else
/// stays text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Coerce captured text into a typed value
    ///
    /// Non-empty text recognized by a permissive numeric-literal test becomes
    /// [`ParamValue::Number`]; everything else remains [`ParamValue::Text`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hashline_router::ParamValue;
    ///
    /// assert_eq!(ParamValue::coerce("1"), ParamValue::Number(1.0));
    /// assert_eq!(ParamValue::coerce("2.5"), ParamValue::Number(2.5));
    /// assert_eq!(ParamValue::coerce("summaries"), ParamValue::Text("summaries".into()));
    /// assert_eq!(ParamValue::coerce(""), ParamValue::Text(String::new()));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        if raw.is_empty() {
            return ParamValue::Text(String::new());
        }
        match raw.parse::<f64>() {
            Ok(number) => ParamValue::Number(number),
            Err(_) => ParamValue::Text(raw.to_string()),
        }
    }

    /// Returns the numeric value, if this parameter coerced to a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this parameter stayed textual
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Number(_) => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

impl PartialEq<f64> for ParamValue {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, ParamValue::Number(n) if n == other)
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, ParamValue::Text(s) if s == other)
    }
}

impl From<&str> for ParamValue {
    fn from(raw: &str) -> Self {
        ParamValue::coerce(raw)
    }
}

/// Pairs captured groups with their declared tokens and coerces each value
///
/// A wildcard capture containing separators decomposes as a **spread**: the
/// captured text splits on `/` into alternating key/value tokens, each value
/// is coerced independently, and the resulting pairs merge directly into the
/// output map (the keys come from the path content, not the token list).
/// Every other capture maps 1:1 to the token at its position.
pub(crate) fn extract_params(
    pattern: &str,
    tokens: &[ParamToken],
    captures: &regex::Captures<'_>,
) -> Result<ParamMap, MatchError> {
    let mut params = ParamMap::new();

    for (index, token) in tokens.iter().enumerate() {
        let Some(capture) = captures.get(index + 1) else {
            continue;
        };
        let raw = capture.as_str();

        if token.kind == TokenKind::Spread && raw.contains('/') {
            let parts: Vec<&str> = raw.split('/').collect();
            if parts.len() % 2 != 0 {
                return Err(MatchError::OddSpread {
                    pattern: pattern.to_string(),
                    captured: raw.to_string(),
                });
            }
            for pair in parts.chunks_exact(2) {
                params.insert(pair[0].to_string(), ParamValue::coerce(pair[1]));
            }
        } else {
            params.insert(token.name.clone(), ParamValue::coerce(raw));
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1", ParamValue::Number(1.0))]
    #[case("-2", ParamValue::Number(-2.0))]
    #[case("2.5", ParamValue::Number(2.5))]
    #[case("1e3", ParamValue::Number(1000.0))]
    #[case("summaries", ParamValue::Text("summaries".into()))]
    #[case("1a", ParamValue::Text("1a".into()))]
    #[case("", ParamValue::Text(String::new()))]
    fn test_coerce(#[case] raw: &str, #[case] expected: ParamValue) {
        assert_eq!(ParamValue::coerce(raw), expected);
    }

    #[test]
    fn test_param_value_comparisons() {
        assert_eq!(ParamValue::coerce("1"), 1.0);
        assert_eq!(ParamValue::coerce("abc"), "abc");
        assert_ne!(ParamValue::coerce("1"), "1");
    }

    #[test]
    fn test_param_value_accessors() {
        assert_eq!(ParamValue::coerce("4").as_f64(), Some(4.0));
        assert_eq!(ParamValue::coerce("4").as_str(), None);
        assert_eq!(ParamValue::coerce("abc").as_str(), Some("abc"));
        assert_eq!(ParamValue::coerce("abc").as_f64(), None);
    }

    #[test]
    fn test_param_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&ParamValue::Number(1.0)).unwrap(),
            "1.0"
        );
        assert_eq!(
            serde_json::to_string(&ParamValue::Text("a".into())).unwrap(),
            "\"a\""
        );
    }
}
