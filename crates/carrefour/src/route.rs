//! Core traits and structs to define the routes of your application.
//!
//! Every view must implement the [`View`] trait. Views are then associated
//! with a path pattern and a name through [`RouteDefinition`], and the
//! resulting table is passed to [`Router::new`](crate::Router::new), through
//! the [`routes!`](crate::routes) macro.
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The result of a view render, either text or raw bytes.
///
/// Typically used through the [`Into<RenderResult>`](std::convert::Into) and
/// [`From<RenderResult>`](std::convert::From) implementations for common
/// types. End users should rarely need to interact with this enum directly.
pub enum RenderResult {
    Text(String),
    Raw(Vec<u8>),
}

impl From<String> for RenderResult {
    fn from(val: String) -> Self {
        RenderResult::Text(val)
    }
}

impl From<&str> for RenderResult {
    fn from(val: &str) -> Self {
        RenderResult::Text(val.to_string())
    }
}

impl From<Vec<u8>> for RenderResult {
    fn from(val: Vec<u8>) -> Self {
        RenderResult::Raw(val)
    }
}

impl From<&[u8]> for RenderResult {
    fn from(val: &[u8]) -> Self {
        RenderResult::Raw(val.to_vec())
    }
}

#[cfg(feature = "maud")]
#[cfg_attr(docsrs, doc(cfg(feature = "maud")))]
impl From<maud::Markup> for RenderResult {
    fn from(val: maud::Markup) -> Self {
        RenderResult::Text(val.into_string())
    }
}

/// Parameters captured from a matched path, e.g. `id` in `/students/[id]`.
///
/// Serializable so hosts can persist and restore navigation state.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams(pub FxHashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FxHashMap::default();
        for (key, value) in iter {
            map.insert(key.into(), value.into());
        }
        RouteParams(map)
    }
}

/// Allows a [`View`] implementation to access the route it was activated for.
pub struct ViewContext<'a> {
    /// Parameters captured from the matched path.
    pub params: &'a RouteParams,
    /// The current path being displayed, e.g. `/students/42`.
    pub current_path: &'a str,
    /// The logical name of the matched route, e.g. `Students`.
    pub name: &'a str,
}

/// A renderable unit of user interface associated with a route.
///
/// The router only ever holds views through this trait, never through
/// concrete types, so route tables stay decoupled from view implementations.
///
/// ## Example
/// ```rust
/// use carrefour::route::prelude::*;
///
/// pub struct Home;
///
/// impl View for Home {
///     fn render(&self, _ctx: &mut ViewContext) -> RenderResult {
///         "<h1>Hello, world!</h1>".into()
///     }
/// }
/// ```
pub trait View: Send + Sync {
    fn render(&self, ctx: &mut ViewContext) -> RenderResult;
}

/// Associates a path pattern and a unique logical name with a view.
///
/// ## Example
/// ```rust
/// use carrefour::route::prelude::*;
/// # pub struct Home;
/// # impl View for Home {
/// #     fn render(&self, _ctx: &mut ViewContext) -> RenderResult {
/// #         "<h1>Hello, world!</h1>".into()
/// #     }
/// # }
///
/// let home = RouteDefinition::new("/", "Home", Home);
/// ```
pub struct RouteDefinition {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) view: Arc<dyn View>,
}

impl RouteDefinition {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl View + 'static) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: Arc::new(view),
        }
    }

    /// The path pattern as written, e.g. `/students/[id]`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique logical name of the route, e.g. `Students`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view this route activates. The definition shares the view, it
    /// does not own it exclusively.
    pub fn view(&self) -> Arc<dyn View> {
        Arc::clone(&self.view)
    }
}

impl Debug for RouteDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("name", &self.name)
            // Views are opaque, there is nothing useful to show
            .finish_non_exhaustive()
    }
}

pub mod prelude {
    //! Re-exports of the most commonly used types and traits for defining
    //! route tables.
    //!
    //! This module is meant to be glob imported in your routes files.
    //!
    //! ## Example
    //! ```rust
    //! use carrefour::route::prelude::*;
    //! ```
    pub use super::{RenderResult, RouteDefinition, RouteParams, View, ViewContext};
    pub use crate::history::{HistoryMode, HistoryProvider, MemoryHistory};
    pub use crate::router::{Location, Resolution, Router};
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl View for Stub {
        fn render(&self, ctx: &mut ViewContext) -> RenderResult {
            format!("{} at {}", ctx.name, ctx.current_path).into()
        }
    }

    #[test]
    fn test_view_receives_context() {
        let definition = RouteDefinition::new("/students", "Students", Stub);

        let params = RouteParams::default();
        let mut ctx = ViewContext {
            params: &params,
            current_path: "/students",
            name: "Students",
        };

        match definition.view().render(&mut ctx) {
            RenderResult::Text(text) => assert_eq!(text, "Students at /students"),
            RenderResult::Raw(_) => panic!("expected text output"),
        }
    }

    #[test]
    fn test_route_params_serde_round_trip() {
        let params = RouteParams::from_iter([("id", "42"), ("term", "fall")]);

        let json = serde_json::to_string(&params).unwrap();
        let restored: RouteParams = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, params);
    }
}
