//! In-process router: route snapshot source and navigation event stream
//!
//! Events are delivered synchronously, one at a time, in FIFO order. An event
//! emitted from inside a listener is queued and delivered once the current
//! event has reached every listener.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::RouteError;
use crate::events::{EventFilter, NavigationEnd, NavigationEvent, NavigationId};
use crate::route::{normalize_path, parse_url, RouteSnapshot, RouteTable};

/// Boxed event callback
pub type Listener = Box<dyn FnMut(&NavigationEvent)>;

/// Supplies the currently resolved route
pub trait RouteSource {
    fn snapshot(&self) -> RouteSnapshot;
}

/// Delivers navigation events to subscribed listeners
pub trait NavigationSource {
    /// Register `listener` for events accepted by `filter`. The listener stays
    /// registered until the returned guard is dropped.
    fn subscribe(&self, filter: EventFilter, listener: Listener) -> Subscription;
}

/// Scoped registration of a listener; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release now instead of at end of scope
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

struct ListenerEntry {
    id: u64,
    filter: EventFilter,
    callback: Rc<RefCell<Listener>>,
}

struct RouterState {
    routes: RouteTable,
    current: RouteSnapshot,
    listeners: Vec<ListenerEntry>,
    queue: VecDeque<NavigationEvent>,
    dispatching: bool,
    next_listener: u64,
    next_navigation: NavigationId,
}

impl RouterState {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|entry| entry.id == id)
    }
}

/// Shared handle to the router; clones point at the same state
#[derive(Clone)]
pub struct Router {
    state: Rc<RefCell<RouterState>>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Router")
            .field("url", &state.current.url)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl PartialEq for Router {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Router {
    /// Create a router already positioned at `initial_url`. No events are
    /// emitted for the initial position.
    pub fn new(routes: RouteTable, initial_url: &str) -> Result<Self, RouteError> {
        let current = routes.resolve(initial_url)?;
        Ok(Self {
            state: Rc::new(RefCell::new(RouterState {
                routes,
                current,
                listeners: Vec::new(),
                queue: VecDeque::new(),
                dispatching: false,
                next_listener: 0,
                next_navigation: 1,
            })),
        })
    }

    /// Current normalized URL
    pub fn url(&self) -> String {
        self.state.borrow().current.url.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Navigate to `url`.
    ///
    /// Returns `Ok(None)` when `url` is already the current location; no
    /// events are emitted in that case.
    pub fn navigate(&self, url: &str) -> Result<Option<NavigationId>, RouteError> {
        parse_url(url)?;
        let id = {
            let mut state = self.state.borrow_mut();
            if normalize_path(url) == state.current.url {
                log::trace!("Ignoring navigation to current URL {url}");
                return Ok(None);
            }
            let id = state.next_navigation;
            state.next_navigation += 1;
            id
        };

        self.emit(NavigationEvent::Start {
            id,
            url: url.to_string(),
        });

        let resolved = self.state.borrow().routes.resolve(url);
        match resolved {
            Ok(snapshot) => {
                self.emit(NavigationEvent::RoutesRecognized {
                    id,
                    url: snapshot.url.clone(),
                });
                self.state.borrow_mut().current = snapshot.clone();
                self.emit(NavigationEvent::End(NavigationEnd {
                    id,
                    url: snapshot.url.clone(),
                    snapshot,
                }));
                Ok(Some(id))
            }
            Err(error) => {
                log::debug!("Navigation {id} to {url} failed: {error}");
                self.emit(NavigationEvent::Error {
                    id,
                    url: url.to_string(),
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Queue `event` for delivery and drain the queue unless a delivery is
    /// already in progress further up the stack.
    pub fn emit(&self, event: NavigationEvent) {
        {
            let mut state = self.state.borrow_mut();
            state.queue.push_back(event);
            if state.dispatching {
                return;
            }
            state.dispatching = true;
        }

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let popped = state.queue.pop_front();
                match popped {
                    Some(event) => {
                        let listeners: Vec<_> = state
                            .listeners
                            .iter()
                            .map(|entry| (entry.id, entry.filter, Rc::clone(&entry.callback)))
                            .collect();
                        Some((event, listeners))
                    }
                    None => {
                        state.dispatching = false;
                        None
                    }
                }
            };
            let Some((event, listeners)) = next else {
                break;
            };

            for (id, filter, callback) in listeners {
                if !filter(&event) {
                    continue;
                }
                // Unsubscribed by an earlier listener of this round
                if !self.state.borrow().is_subscribed(id) {
                    continue;
                }
                (&mut *callback.borrow_mut())(&event);
            }
        }
    }

    fn downgrade(&self) -> Weak<RefCell<RouterState>> {
        Rc::downgrade(&self.state)
    }
}

impl RouteSource for Router {
    fn snapshot(&self) -> RouteSnapshot {
        self.state.borrow().current.clone()
    }
}

impl NavigationSource for Router {
    fn subscribe(&self, filter: EventFilter, listener: Listener) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_listener;
            state.next_listener += 1;
            state.listeners.push(ListenerEntry {
                id,
                filter,
                callback: Rc::new(RefCell::new(listener)),
            });
            id
        };

        let weak = self.downgrade();
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|entry| entry.id != id);
                log::trace!("Listener {id} unsubscribed");
            }
        })
    }
}
