//! The route table resolver and its navigation operations.
use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, NavigationError};
use crate::history::{HistoryMode, HistoryProvider, MemoryHistory};
use crate::route::{RenderResult, RouteDefinition, RouteParams, View, ViewContext};
use crate::routing::{PathPattern, normalize_path};

struct RouteEntry {
    definition: RouteDefinition,
    pattern: PathPattern,
}

/// A resolved position in the route table: which route matched, at which
/// concrete path, with which captured parameters.
///
/// Serializable so hosts can persist and restore navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub path: String,
    pub params: RouteParams,
}

/// The outcome of resolving a requested path against the route table.
///
/// An unmatched path is reported explicitly rather than silently rendering
/// nothing; callers decide what to display, or configure a catch-all through
/// [`Router::with_fallback`].
pub enum Resolution<'r> {
    Matched {
        route: &'r RouteDefinition,
        location: Location,
    },
    NotFound {
        path: String,
    },
}

impl Resolution<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Resolution::Matched { location, .. } => Some(location),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// An immutable, ordered table of route definitions with a navigation
/// cursor.
///
/// The table is validated once at construction and never mutated afterwards:
/// resolution is a pure, synchronous lookup. Navigation operations
/// ([`push`](Router::push), [`replace`](Router::replace),
/// [`back`](Router::back), [`forward`](Router::forward)) additionally update
/// the history provider and the current location.
///
/// ## Example
/// ```rust
/// use carrefour::route::prelude::*;
/// use carrefour::routes;
/// # struct Home;
/// # impl View for Home {
/// #     fn render(&self, _ctx: &mut ViewContext) -> RenderResult { "Home".into() }
/// # }
/// # struct Students;
/// # impl View for Students {
/// #     fn render(&self, _ctx: &mut ViewContext) -> RenderResult { "Students".into() }
/// # }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new(
///     routes![
///         RouteDefinition::new("/", "Home", Home),
///         RouteDefinition::new("/students", "Students", Students),
///     ],
///     HistoryMode::Web,
/// )?;
///
/// let location = router.push("/students")?;
/// assert_eq!(location.name, "Students");
/// # Ok(())
/// # }
/// ```
pub struct Router {
    entries: Vec<RouteEntry>,
    names: FxHashMap<String, usize>,
    fallback: Option<usize>,
    mode: HistoryMode,
    history: Box<dyn HistoryProvider>,
    current: Option<Location>,
}

impl Router {
    /// Builds a router backed by an in-process [`MemoryHistory`] starting at
    /// the root path.
    pub fn new(routes: Vec<RouteDefinition>, mode: HistoryMode) -> Result<Self, ConfigError> {
        let history = MemoryHistory::new(mode.format("/"));
        Self::with_history(routes, mode, Box::new(history))
    }

    /// Builds a router on top of a host-provided history. The router adopts
    /// the location the provider already shows, when it matches a route.
    pub fn with_history(
        routes: Vec<RouteDefinition>,
        mode: HistoryMode,
        history: Box<dyn HistoryProvider>,
    ) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(routes.len());
        let mut names = FxHashMap::default();
        let mut paths = FxHashSet::default();

        for definition in routes {
            let pattern = PathPattern::parse(&definition.path)?;

            if !paths.insert(pattern.raw().to_string()) {
                return Err(ConfigError::DuplicateRoutePath {
                    path: pattern.raw().to_string(),
                });
            }

            if names
                .insert(definition.name.clone(), entries.len())
                .is_some()
            {
                return Err(ConfigError::DuplicateRouteName {
                    name: definition.name.clone(),
                });
            }

            debug!(
                "registered {:?} route `{}` at `{}`",
                pattern.route_type(),
                definition.name,
                pattern.raw()
            );

            entries.push(RouteEntry {
                definition,
                pattern,
            });
        }

        let mut router = Self {
            entries,
            names,
            fallback: None,
            mode,
            history,
            current: None,
        };

        let initial = router.mode.extract(&router.history.location());
        let current = match router.resolve(&initial) {
            Resolution::Matched { location, .. } => Some(location),
            Resolution::NotFound { .. } => None,
        };
        router.current = current;

        Ok(router)
    }

    /// Designates an existing route as the catch-all for unmatched paths.
    ///
    /// Without a fallback, navigating to an unmatched path is a
    /// [`NavigationError::NotFound`].
    pub fn with_fallback(mut self, name: &str) -> Result<Self, ConfigError> {
        let index = *self
            .names
            .get(name)
            .ok_or_else(|| ConfigError::UnknownFallback {
                name: name.to_string(),
            })?;

        self.fallback = Some(index);
        Ok(self)
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The location the history provider currently shows, in its
    /// strategy-formatted form (e.g. `/#/students` in hash mode).
    pub fn visible_location(&self) -> String {
        self.history.location()
    }

    /// The currently active location, if any path has matched so far.
    pub fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    /// Resolves a requested path against the table, first match in table
    /// order wins. Pure lookup: no history or current-location side effects,
    /// and the configured fallback does not apply here.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let requested = normalize_path(path);

        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(&requested) {
                debug!(
                    "`{}` resolved to route `{}`",
                    requested, entry.definition.name
                );

                return Resolution::Matched {
                    route: &entry.definition,
                    location: Location {
                        name: entry.definition.name.clone(),
                        path: requested,
                        params,
                    },
                };
            }
        }

        Resolution::NotFound { path: requested }
    }

    /// Navigates to a path, appending a new history entry.
    pub fn push(&mut self, path: &str) -> Result<Location, NavigationError> {
        let location = self.resolve_or_fallback(path)?;
        self.history.push(self.mode.format(&location.path));
        Ok(self.commit(location))
    }

    /// Navigates to a route by name, appending a new history entry. The
    /// concrete path is built from the route's pattern and `params`.
    pub fn push_named(
        &mut self,
        name: &str,
        params: RouteParams,
    ) -> Result<Location, NavigationError> {
        let location = self.named_location(name, params)?;
        self.history.push(self.mode.format(&location.path));
        Ok(self.commit(location))
    }

    /// Navigates to a path, replacing the current history entry.
    pub fn replace(&mut self, path: &str) -> Result<Location, NavigationError> {
        let location = self.resolve_or_fallback(path)?;
        self.history.replace(self.mode.format(&location.path));
        Ok(self.commit(location))
    }

    /// Navigates to a route by name, replacing the current history entry.
    pub fn replace_named(
        &mut self,
        name: &str,
        params: RouteParams,
    ) -> Result<Location, NavigationError> {
        let location = self.named_location(name, params)?;
        self.history.replace(self.mode.format(&location.path));
        Ok(self.commit(location))
    }

    /// Moves one history entry back and re-resolves it. Returns `Ok(None)`
    /// when already at the oldest entry.
    pub fn back(&mut self) -> Result<Option<Location>, NavigationError> {
        let Some(visible) = self.history.back() else {
            return Ok(None);
        };

        let path = self.mode.extract(&visible);
        let location = self.resolve_or_fallback(&path)?;
        Ok(Some(self.commit(location)))
    }

    /// Moves one history entry forward and re-resolves it. Returns
    /// `Ok(None)` when already at the newest entry.
    pub fn forward(&mut self) -> Result<Option<Location>, NavigationError> {
        let Some(visible) = self.history.forward() else {
            return Ok(None);
        };

        let path = self.mode.extract(&visible);
        let location = self.resolve_or_fallback(&path)?;
        Ok(Some(self.commit(location)))
    }

    /// The view a location activates, shared with the table.
    pub fn view_of(&self, location: &Location) -> Option<Arc<dyn View>> {
        self.names
            .get(&location.name)
            .map(|&index| self.entries[index].definition.view())
    }

    /// Renders the view of the current location, handing the result to the
    /// host rendering layer.
    pub fn render_current(&self) -> Option<RenderResult> {
        let location = self.current.as_ref()?;
        let index = *self.names.get(&location.name)?;
        let entry = &self.entries[index];

        let mut ctx = ViewContext {
            params: &location.params,
            current_path: &location.path,
            name: &location.name,
        };

        Some(entry.definition.view.render(&mut ctx))
    }

    fn resolve_or_fallback(&self, path: &str) -> Result<Location, NavigationError> {
        match self.resolve(path) {
            Resolution::Matched { location, .. } => Ok(location),
            Resolution::NotFound { path } => match self.fallback {
                Some(index) => {
                    let name = &self.entries[index].definition.name;
                    warn!("no route matches `{}`, falling back to `{}`", path, name);

                    Ok(Location {
                        name: name.clone(),
                        // The requested path stays visible, only the view changes
                        path,
                        params: RouteParams::default(),
                    })
                }
                None => {
                    warn!("no route matches `{}`", path);
                    Err(NavigationError::NotFound { path })
                }
            },
        }
    }

    fn named_location(
        &self,
        name: &str,
        params: RouteParams,
    ) -> Result<Location, NavigationError> {
        let index = *self
            .names
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRouteName {
                name: name.to_string(),
            })?;

        let entry = &self.entries[index];
        let path = entry.pattern.fill(&params)?;

        Ok(Location {
            name: entry.definition.name.clone(),
            path,
            params,
        })
    }

    fn commit(&mut self, location: Location) -> Location {
        debug!("navigated to `{}` ({})", location.path, location.name);
        self.current = Some(location.clone());
        location
    }
}
