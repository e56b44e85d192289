use dioxus::prelude::*;
use docs_menu::prelude::MenuNode;

use crate::components::navigation::{MenuLinkItem, NavSection};
use crate::hooks::{use_menu_state, MenuState, SiteNavigation};
use crate::Route;

/// The sidebar tree. Expansion follows the current route; headers can also be
/// toggled by hand.
#[component]
pub fn Menu(navigation: SiteNavigation, is_sidebar_opened: bool) -> Element {
    let mut menu = use_menu_state(&navigation);

    use_effect(use_reactive((&is_sidebar_opened,), move |(opened,)| {
        menu.set_sidebar_opened(opened);
    }));

    let current = use_route::<Route>().to_string();
    let (items, sidebar_opened) = {
        let controller = menu.controller.read();
        (controller.items().to_vec(), controller.is_sidebar_opened())
    };

    rsx! {
        nav {
            class: if sidebar_opened { "menu" } else { "menu menu-collapsed" },
            for (index, item) in items.into_iter().enumerate() {
                MenuEntry {
                    key: "{index}",
                    index,
                    item,
                    current: current.clone(),
                    menu,
                }
            }
        }
    }
}

#[component]
fn MenuEntry(index: usize, item: MenuNode, current: String, menu: MenuState) -> Element {
    if !item.is_category() {
        return rsx! {
            div { class: "menu-item",
                MenuLinkItem { node: item, current }
            }
        };
    }

    let mut menu = menu;
    let is_active = item.contains_active(&current);
    rsx! {
        NavSection {
            title: item.title.clone(),
            is_opened: item.is_opened,
            is_active,
            is_new: item.is_new,
            on_toggle: move |_| menu.toggle(index),
            for child in item.children.iter().cloned() {
                MenuLinkItem { node: child, current: current.clone() }
            }
        }
    }
}
