//! # Hashline Router
//!
//! The matching core of the hashline fragment router:
//! - Fragment normalization (`#!/item/1` → `/item/1`)
//! - Route pattern compilation (`/item/:id`, `/docs/*rest`, `default`)
//! - Ordered first-declared-wins matching
//! - Typed parameter extraction with numeric coercion and wildcard spreads
//!
//! Everything in this crate is synchronous and free of I/O. The navigation
//! layer (the `hashline` crate) feeds it canonical paths and turns its
//! results into a subscription stream.
//!
//! ## Pattern syntax
//!
//! - Literal segments match verbatim: `/about/plants`
//! - `:name` matches exactly one non-empty segment and binds it to `name`
//! - `*name` greedily matches one or more characters, possibly spanning
//!   several segments; when the matched text itself contains
//!   separator-delimited alternating key/value tokens, those tokens bind
//!   directly as additional parameters
//! - The reserved key `default` matches only when no other pattern does
//!
//! ## Example
//!
//! ```
//! use hashline_router::{RouteMatch, RouteTable};
//!
//! let table = RouteTable::compile(vec![
//!     ("/item/:id", "item-page"),
//!     ("/dashboard/:category/*rest", "dashboard-page"),
//!     ("default", "not-found"),
//! ])
//! .unwrap();
//!
//! let Some(RouteMatch::Positional { route, params }) =
//!     table.lookup("/dashboard/summaries/item/1").unwrap()
//! else {
//!     panic!("expected a positional match");
//! };
//! assert_eq!(route.payload, "dashboard-page");
//! assert_eq!(params["category"], "summaries");
//! assert_eq!(params["item"], 1.0);
//! ```

use serde::Serialize;

pub mod error;
pub mod params;
pub mod path;
pub mod pattern;

pub use error::{MatchError, PatternError};
pub use params::{ParamMap, ParamValue};
pub use path::{is_canonical_fragment, normalize_fragment};
pub use pattern::{CompiledRoute, ParamToken, RouteMatch, RouteTable, TokenKind, DEFAULT_PATTERN};

/// The resolved state of one navigation: where the application is and what
/// the path carried there
///
/// An explicit structured record: fixed fields plus the extracted parameter
/// map, rather than a dynamically merged object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteState {
    /// The canonical path that resolved
    pub path: String,
    /// The declared pattern that matched it
    pub route_pattern: String,
    /// The extras payload correlated with this navigation, if one was stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
    /// Extracted parameters, coerced
    pub params: ParamMap,
}

/// One emission of the router's result stream: the matched route's payload
/// plus the resolved state
#[derive(Debug, Clone)]
pub struct ResolvedRoute<T> {
    /// The caller's payload for the matched pattern, verbatim
    pub payload: T,
    pub state: RouteState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_state_serializes() {
        let mut params = ParamMap::new();
        params.insert("id".to_string(), ParamValue::Number(1.0));

        let state = RouteState {
            path: "/item/1".to_string(),
            route_pattern: "/item/:id".to_string(),
            extras: None,
            params,
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["path"], "/item/1");
        assert_eq!(json["route_pattern"], "/item/:id");
        assert_eq!(json["params"]["id"], 1.0);
        assert!(json.get("extras").is_none());
    }
}
