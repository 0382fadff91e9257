//! # Hashline
//!
//! Fragment-based navigation for single-page applications. A
//! [`HashRouter`] resolves every fragment change against a declared set of
//! route patterns and emits one [`ResolvedRoute`] per distinct canonical
//! path: the matched pattern's payload, the extracted typed parameters, and
//! the extras payload correlated with the navigation that requested it.
//!
//! The matching core lives in the `hashline-router` crate; this crate adds
//! the location collaborator, the pop-once extras cache, and the
//! subscription stream.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use futures::{FutureExt, StreamExt};
//! use hashline::{HashRouter, MemoryLocation};
//!
//! let location = Arc::new(MemoryLocation::with_fragment("#/item/1"));
//! let router = HashRouter::new(location);
//!
//! let stream = router
//!     .create_stream(vec![("/item/:id", "item-page"), ("default", "not-found")])
//!     .unwrap();
//! futures::pin_mut!(stream);
//!
//! // Subscribing synchronously delivers the currently-resolvable path
//! let resolved = stream.next().now_or_never().flatten().unwrap();
//! assert_eq!(resolved.payload, "item-page");
//! assert_eq!(resolved.state.path, "/item/1");
//! assert_eq!(resolved.state.params["id"], 1.0);
//! ```

pub mod extras;
pub mod location;
pub mod router;

pub use extras::ExtrasCache;
pub use location::{LocationSource, MemoryLocation};
pub use router::HashRouter;

// Re-export the matching core
pub use hashline_router::{
    is_canonical_fragment, normalize_fragment, CompiledRoute, MatchError, ParamMap, ParamValue,
    PatternError, ResolvedRoute, RouteMatch, RouteState, RouteTable, DEFAULT_PATTERN,
};
