//! Error types for Carrefour.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust's uses the Debug trait to show errors when they're returned from main
                    // But, thiserror uses the Display trait to show errors. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Raised while constructing a [`Router`](crate::Router). These are startup
/// failures: a table that passes construction can never hit them at
/// resolution time.
#[derive(Error)]
pub enum ConfigError {
    #[error("duplicate route name `{name}`, route names must be unique across the table")]
    DuplicateRouteName { name: String },
    #[error("duplicate route path `{path}`, route paths must be unique across the table")]
    DuplicateRoutePath { path: String },
    #[error("invalid route pattern `{path}`: {reason}")]
    InvalidPattern { path: String, reason: String },
    #[error("fallback route `{name}` does not exist in the route table")]
    UnknownFallback { name: String },
}

/// Raised by navigation operations on a [`Router`](crate::Router).
#[derive(Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`")]
    NotFound { path: String },
    #[error("no route named `{name}`")]
    UnknownRouteName { name: String },
    #[error("route `{path}` is missing parameter `{param}`")]
    MissingParameter { path: String, param: String },
}

#[derive(Error, Debug)]
pub enum CarrefourError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl_debug_for_error!(ConfigError, NavigationError);
