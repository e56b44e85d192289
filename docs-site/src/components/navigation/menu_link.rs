use dioxus::prelude::*;
use docs_menu::prelude::{MenuLink, MenuNode};

/// A single page entry: router link, external link, or bare label
#[component]
pub fn MenuLinkItem(node: MenuNode, current: String) -> Element {
    let title = node.title.clone();
    let is_new = node.is_new;

    match node.link() {
        MenuLink::Internal(path) => {
            let class = if node.is_active(&current) { "menu-link active" } else { "menu-link" }.to_string();
            rsx! {
                Link { to: path.to_string(), class,
                    "{title}"
                    if is_new {
                        span { class: "badge-new", "NEW" }
                    }
                }
            }
        }
        MenuLink::External(url) => rsx! {
            a {
                class: "menu-link external",
                href: url.to_string(),
                target: "_blank",
                rel: "noopener noreferrer",
                "{title}"
                span { class: "external-icon", "↗" }
            }
        },
        MenuLink::None => rsx! {
            span { class: "menu-link", "{title}" }
        },
    }
}
