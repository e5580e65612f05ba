//! Navigation over the route table.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::history::WebHistory;
use crate::matcher::{full_path, query_pairs, Location, Params};
use crate::route::{RouteMeta, RouteName, RouteTable, RouteTarget};
use crate::view::{StaticViewLoader, ViewCache, ViewComponent, ViewLoader, ViewModule};
use crate::RouterError;

/// Redirect hops followed before resolution gives up
pub const MAX_REDIRECTS: usize = 8;

/// A location resolved to exactly one named route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    /// Matched path, without query, fragment or trailing slash
    pub path: String,
    pub params: Params,
    pub query: Option<String>,
    pub hash: Option<String>,
    pub meta: RouteMeta,
    /// The location originally asked for, when a redirect was followed
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn component(&self) -> ViewComponent {
        self.name.component()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        query_pairs(self.query.as_deref())
    }

    /// Path plus query and fragment, as stored in history
    pub fn full_path(&self) -> String {
        full_path(&self.path, self.query.as_deref(), self.hash.as_deref())
    }
}

/// Result of a successful navigation
#[derive(Debug, Clone)]
pub struct Navigation {
    pub route: ResolvedRoute,
    pub view: Arc<ViewModule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Commit {
    Push,
    Replace,
    Go(isize),
}

/// Client-side router with web-history navigation.
///
/// Resolution is pure. Navigation resolves, loads the target view through the
/// loader on first entry, and only then commits to history, so a failed
/// navigation leaves history and the current route untouched.
pub struct Router<L: ViewLoader = StaticViewLoader> {
    table: RouteTable,
    history: WebHistory,
    loader: L,
    views: ViewCache,
    current: Option<ResolvedRoute>,
}

impl Router<StaticViewLoader> {
    /// Application routes under `base`, with the default view loader
    pub fn new(base: &str) -> Self {
        Self::with_loader(RouteTable::edurag(), base, StaticViewLoader::default())
    }
}

impl Default for Router<StaticViewLoader> {
    fn default() -> Self {
        Self::new("/")
    }
}

impl<L: ViewLoader> Router<L> {
    pub fn with_loader(table: RouteTable, base: &str, loader: L) -> Self {
        Self {
            table,
            history: WebHistory::new(base),
            loader,
            views: ViewCache::new(),
            current: None,
        }
    }

    /// Resolve a location without navigating or loading anything
    pub fn resolve(&self, raw: &str) -> Result<ResolvedRoute, RouterError> {
        let location = Location::parse(raw);
        let mut path = normalise(&location.path);
        let mut hops = 0;

        loop {
            let Some((record, params)) = self.table.find(&path) else {
                warn!(path = %raw, "No route matches");
                return Err(RouterError::NoMatch {
                    path: raw.to_string(),
                });
            };

            match &record.target {
                RouteTarget::Redirect(to) => {
                    hops += 1;
                    if hops > MAX_REDIRECTS {
                        warn!(path = %raw, hops, "Redirect loop");
                        return Err(RouterError::RedirectLoop {
                            path: raw.to_string(),
                        });
                    }
                    debug!(from = %path, to = %to, "Following redirect");
                    path = normalise(&Location::parse(to).path);
                }
                RouteTarget::View { name, meta } => {
                    return Ok(ResolvedRoute {
                        name: *name,
                        path,
                        params,
                        query: location.query.clone(),
                        hash: location.hash.clone(),
                        meta: *meta,
                        redirected_from: (hops > 0).then(|| location.full_path()),
                    });
                }
            }
        }
    }

    /// Initial navigation from a browser URL; replaces the current entry
    pub fn start(&mut self, initial: &str) -> Result<Navigation, RouterError> {
        let location = self.history.strip_base(initial).to_string();
        self.navigate(&location, Commit::Replace)
    }

    /// Navigate to `raw`, adding a history entry unless it is already current
    pub fn push(&mut self, raw: &str) -> Result<Navigation, RouterError> {
        self.navigate(raw, Commit::Push)
    }

    /// Navigate to a named route with its parameters
    pub fn push_named(
        &mut self,
        name: RouteName,
        params: &[(&str, &str)],
    ) -> Result<Navigation, RouterError> {
        let params: Params = params.iter().copied().collect();
        let path = self.table.path_of(name, &params)?;
        self.push(&path)
    }

    /// Navigate to `raw`, overwriting the current entry
    pub fn replace(&mut self, raw: &str) -> Result<Navigation, RouterError> {
        self.navigate(raw, Commit::Replace)
    }

    pub fn back(&mut self) -> Result<Navigation, RouterError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Navigation, RouterError> {
        self.go(1)
    }

    /// Move `delta` entries through history and render what is there
    pub fn go(&mut self, delta: isize) -> Result<Navigation, RouterError> {
        let target = self.history.peek(delta)?.to_string();
        self.navigate(&target, Commit::Go(delta))
    }

    fn navigate(&mut self, raw: &str, commit: Commit) -> Result<Navigation, RouterError> {
        let route = self.resolve(raw)?;
        let view = self.views.get_or_load(route.component(), &self.loader)?;
        let entry = route.full_path();

        match commit {
            Commit::Push => {
                if self.history.location() != Some(entry.as_str()) {
                    self.history.push(entry);
                }
            }
            Commit::Replace => self.history.replace(entry),
            Commit::Go(delta) => {
                self.history.go(delta)?;
            }
        }

        debug!(route = %route.name, path = %route.path, "Navigated");
        self.current = Some(route.clone());
        Ok(Navigation { route, view })
    }

    /// Route rendered by the last successful navigation
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// Browser-visible URL for an in-app location
    pub fn href(&self, location: &str) -> String {
        self.history.href(location)
    }

    pub fn is_view_loaded(&self, component: ViewComponent) -> bool {
        self.views.is_loaded(component)
    }

    /// Number of views loaded so far this session
    pub fn loaded_views(&self) -> usize {
        self.views.len()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }
}

fn normalise(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => path.to_string(),
    }
}
