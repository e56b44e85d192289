//! Error types for the menu crate
//!
//! Route synchronization never fails. These errors only surface while a menu
//! table is loaded, while configuration is read, or when the in-process
//! router is asked to navigate somewhere it cannot resolve.

use thiserror::Error;

/// Errors raised while building a menu from its table or configuration
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu table has no top-level items")]
    EmptyTable,

    #[error("Default section '{0}' not found among top-level items")]
    DefaultSectionNotFound(String),

    #[error("Default section '{0}' has no children and cannot be expanded")]
    DefaultSectionNotExpandable(String),

    #[error("Duplicate top-level key '{0}'")]
    DuplicateKey(String),

    #[error("Menu item '{0}' has both an internal path and an external URL")]
    ConflictingLinks(String),

    #[error("Invalid configuration value for {name}: '{value}'")]
    InvalidConfig { name: &'static str, value: String },

    #[error("Route error: {0}")]
    Routing(#[from] RouteError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Menu table parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for menu table and configuration operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors returned by [`crate::router::Router::navigate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("URL '{0}' must start with '/'")]
    NotAbsolute(String),

    #[error("No route matches URL '{0}'")]
    NoMatch(String),
}
