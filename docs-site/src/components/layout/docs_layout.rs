use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::hooks::use_site_navigation;
use crate::Route;

#[component]
pub fn DocsLayout() -> Element {
    let route = use_route::<Route>();
    let url = route.to_string();
    let navigation = use_site_navigation(url.clone());

    // Feed every route change into the menu router; the menu listens for the
    // completed navigation it produces.
    let nav = navigation.clone();
    use_effect(use_reactive((&url,), move |(url,)| {
        let Some(nav) = &nav else { return };
        match nav.router.navigate(&url) {
            Ok(Some(id)) => tracing::debug!("Navigation {id} completed at {url}"),
            Ok(None) => {}
            Err(e) => tracing::debug!("Menu router rejected {url}: {e}"),
        }
    }));

    rsx! {
        div { class: "docs-layout",
            {navigation.map(|navigation| rsx! { crate::components::layout::Sidebar { navigation } })}

            main { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
