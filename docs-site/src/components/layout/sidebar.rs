use dioxus::prelude::*;

use crate::components::navigation::Menu;
use crate::hooks::SiteNavigation;

#[component]
pub fn Sidebar(navigation: SiteNavigation) -> Element {
    let mut is_expanded = use_signal(|| navigation.menu.is_sidebar_opened());

    rsx! {
        aside {
            class: if is_expanded() { "sidebar" } else { "sidebar sidebar-collapsed" },

            if is_expanded() {
                div { class: "sidebar-header",
                    div { class: "sidebar-brand",
                        Link { to: "/", "NestJS 中文文档" }
                    }
                    button {
                        class: "btn-collapse",
                        onclick: move |_| is_expanded.set(false),
                        "‹"
                    }
                }
            } else {
                div { class: "sidebar-collapsed-content",
                    button {
                        class: "btn-expand",
                        onclick: move |_| is_expanded.set(true),
                        title: "Expand navigation",
                        "›"
                    }
                }
            }

            Menu { navigation, is_sidebar_opened: is_expanded() }
        }
    }
}
