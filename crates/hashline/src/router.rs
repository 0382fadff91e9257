// File: hashline/src/router.rs
// Purpose: Router instance - route subscription streams and programmatic
// navigation

use std::sync::Arc;

use futures::{future, Stream, StreamExt};
use serde_json::Value;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, trace, warn};

use hashline_router::{
    normalize_fragment, ParamMap, PatternError, ResolvedRoute, RouteMatch, RouteState, RouteTable,
};

use crate::extras::ExtrasCache;
use crate::location::LocationSource;

/// A fragment router bound to one location collaborator
///
/// Each instance owns its own extras cache, so independent routers (and
/// isolated tests) coexist without shared state. Route streams are created
/// per registration with [`create_stream`](HashRouter::create_stream);
/// navigation goes through [`push`](HashRouter::push) and
/// [`replace`](HashRouter::replace).
pub struct HashRouter {
    location: Arc<dyn LocationSource>,
    extras: Arc<ExtrasCache>,
}

impl HashRouter {
    pub fn new(location: Arc<dyn LocationSource>) -> Self {
        Self {
            location,
            extras: Arc::new(ExtrasCache::new()),
        }
    }

    /// The location collaborator this router reads and writes
    pub fn location(&self) -> &Arc<dyn LocationSource> {
        &self.location
    }

    /// The extras correlation cache owned by this router
    pub fn extras(&self) -> &ExtrasCache {
        &self.extras
    }

    /// Compiles `routes` and returns the stream of resolved navigations
    ///
    /// Compilation failures surface synchronously; nothing is registered in
    /// that case. The returned stream is lazy and restartable: on first poll
    /// it synchronously resolves the fragment current at that moment, then
    /// emits once per subsequent distinct canonical path. Consecutive events
    /// normalizing to the same path are deduplicated; unhandled paths emit
    /// nothing and leave the stream alive. Every call recompiles, and
    /// concurrent subscriptions are independent.
    pub fn create_stream<T, I, S>(
        &self,
        routes: I,
    ) -> Result<impl Stream<Item = ResolvedRoute<T>> + Send + 'static, PatternError>
    where
        T: Clone + Send + 'static,
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let table = RouteTable::compile(routes)?;
        debug!(routes = table.len(), "route stream registered");

        let extras = Arc::clone(&self.extras);
        let mut last_path: Option<String> = None;

        let stream = WatchStream::new(self.location.changes()).filter_map(move |raw| {
            let path = normalize_fragment(&raw);
            let resolved = if last_path.as_deref() == Some(&*path) {
                None
            } else {
                let path = path.into_owned();
                last_path = Some(path.clone());
                resolve_event(&table, &extras, path)
            };
            future::ready(resolved)
        });

        Ok(stream)
    }

    /// Requests the location adopt `path` as a new history entry
    ///
    /// `extras` is stored keyed by the canonical form of `path` and delivered
    /// with the first resolution of that path.
    pub fn push(&self, path: &str, extras: Option<Value>) {
        self.store_extras(path, extras);
        debug!(path, "push navigation");
        self.location.assign(path);
    }

    /// Requests the location adopt `path`, replacing the current history
    /// entry
    pub fn replace(&self, path: &str, extras: Option<Value>) {
        self.store_extras(path, extras);
        debug!(path, "replace navigation");
        self.location.replace(path);
    }

    // The cache write happens before the location write: a listener may
    // resolve the new fragment as soon as the location adopts it
    fn store_extras(&self, path: &str, extras: Option<Value>) {
        if let Some(extras) = extras {
            let canonical = normalize_fragment(path).into_owned();
            self.extras.set(canonical, extras);
        }
    }
}

/// Resolves one deduplicated navigation event to an emission, or nothing
fn resolve_event<T: Clone>(
    table: &RouteTable<T>,
    extras: &ExtrasCache,
    path: String,
) -> Option<ResolvedRoute<T>> {
    match table.lookup(&path) {
        Ok(Some(RouteMatch::Positional { route, params })) => {
            let extras = extras.pop(&path);
            trace!(%path, pattern = %route.pattern, "route resolved");
            Some(ResolvedRoute {
                payload: route.payload.clone(),
                state: RouteState {
                    path,
                    route_pattern: route.pattern.clone(),
                    extras,
                    params,
                },
            })
        }
        Ok(Some(RouteMatch::Fallback { route })) => {
            trace!(%path, "default route resolved");
            Some(ResolvedRoute {
                payload: route.payload.clone(),
                state: RouteState {
                    path,
                    route_pattern: route.pattern.clone(),
                    extras: None,
                    params: ParamMap::new(),
                },
            })
        }
        Ok(None) => {
            trace!(%path, "no matching route");
            None
        }
        Err(error) => {
            warn!(%path, %error, "navigation event skipped");
            None
        }
    }
}
