use std::rc::Rc;

use dioxus::prelude::*;
use docs_menu::prelude::{MenuBinding, MenuStateController, RouteSnapshot, SyncOutcome, SyncTarget};

use crate::hooks::use_site_navigation::SiteNavigation;

#[derive(Clone, Copy, PartialEq)]
pub struct MenuState {
    pub controller: Signal<MenuStateController>,
}

/// Routes synchronization passes into the signal so the menu re-renders
#[derive(Clone, Copy)]
struct SignalTarget(Signal<MenuStateController>);

impl SyncTarget for SignalTarget {
    fn synchronize(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome {
        self.0.write().synchronize(snapshot)
    }
}

/// Menu state bound to the site router.
///
/// The binding lives in a hook slot, so the router subscription is released
/// when the owning component unmounts.
pub fn use_menu_state(navigation: &SiteNavigation) -> MenuState {
    let template = Rc::clone(&navigation.menu);
    let controller = use_signal(move || (*template).clone());

    let router = navigation.router.clone();
    use_hook(move || Rc::new(MenuBinding::attach(SignalTarget(controller), &router)));

    MenuState { controller }
}

impl MenuState {
    pub fn toggle(&mut self, index: usize) {
        self.controller.write().toggle(index);
    }

    pub fn set_sidebar_opened(&mut self, opened: bool) {
        if self.controller.peek().is_sidebar_opened() != opened {
            self.controller.write().set_sidebar_opened(opened);
        }
    }
}
