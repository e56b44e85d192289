//! Navigation events emitted by the router

use crate::error::RouteError;
use crate::route::RouteSnapshot;

/// Monotonic identifier of one navigation
pub type NavigationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A navigation was requested
    Start { id: NavigationId, url: String },
    /// The URL was matched against the route table
    RoutesRecognized { id: NavigationId, url: String },
    /// The visible route finished changing
    End(NavigationEnd),
    /// The navigation could not be resolved
    Error { id: NavigationId, url: String, error: RouteError },
}

/// Payload of a completed navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEnd {
    pub id: NavigationId,
    pub url: String,
    /// Resolved state the navigation ended on
    pub snapshot: RouteSnapshot,
}

impl NavigationEvent {
    pub fn id(&self) -> NavigationId {
        match self {
            Self::Start { id, .. } | Self::RoutesRecognized { id, .. } | Self::Error { id, .. } => *id,
            Self::End(end) => end.id,
        }
    }

    /// Filter for "navigation completed" events
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End(_))
    }
}

/// Predicate choosing which events a listener receives
pub type EventFilter = fn(&NavigationEvent) -> bool;

/// Accept every event
pub fn all_events(_: &NavigationEvent) -> bool {
    true
}
