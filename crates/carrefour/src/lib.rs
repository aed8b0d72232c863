#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod history;
pub mod route;
pub mod router;

mod routing;

// Exports for end-users
pub use router::{Location, Resolution, Router};
pub use routing::RouteType;

// Internal modules
mod logging;

pub use logging::init_logging;

/// Helps to define the route table passed to [`Router::new`].
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
/// let router = Router::new(
///     routes![
///         RouteDefinition::new("/", "Home", Home),
///         RouteDefinition::new("/students", "Students", Students),
///     ],
///     HistoryMode::Web,
/// )?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! routes {
    [$($route:expr),* $(,)?] => {
        vec![$($route),*]
    };
}
