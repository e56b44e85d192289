//! Wiring between the controller and the router
//!
//! [`MenuBinding::attach`] is the controller's initialization: it subscribes
//! to completed navigations and runs one pass for the route that is active at
//! startup, since a direct load never produces a navigation event. Dropping
//! the binding releases the subscription.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::{MenuStateController, SyncOutcome};
use crate::events::NavigationEvent;
use crate::route::RouteSnapshot;
use crate::router::{NavigationSource, RouteSource, Subscription};

/// Anything that can absorb a synchronization pass
pub trait SyncTarget {
    fn synchronize(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome;
}

impl SyncTarget for MenuStateController {
    fn synchronize(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome {
        MenuStateController::synchronize(self, snapshot)
    }
}

impl<T: SyncTarget> SyncTarget for Rc<RefCell<T>> {
    fn synchronize(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome {
        self.borrow_mut().synchronize(snapshot)
    }
}

/// Live subscription of a menu to navigation events
#[derive(Debug)]
pub struct MenuBinding {
    subscription: Subscription,
    initial: SyncOutcome,
}

impl MenuBinding {
    pub fn attach<T, S>(mut target: T, source: &S) -> Self
    where
        T: SyncTarget + Clone + 'static,
        S: RouteSource + NavigationSource,
    {
        let mut listener_target = target.clone();
        let subscription = source.subscribe(
            NavigationEvent::is_end,
            Box::new(move |event: &NavigationEvent| {
                if let NavigationEvent::End(end) = event {
                    listener_target.synchronize(&end.snapshot);
                }
            }),
        );

        let initial = target.synchronize(&source.snapshot());
        log::debug!("Menu attached, startup pass: {initial:?}");

        Self {
            subscription,
            initial,
        }
    }

    /// Outcome of the startup pass
    pub fn initial_outcome(&self) -> &SyncOutcome {
        &self.initial
    }

    /// Stop listening; equivalent to dropping the binding
    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}
