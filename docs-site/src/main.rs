use dioxus::prelude::*;

// Module Declarations
mod components;
mod hooks;
mod pages;

use components::layout::DocsLayout;
use pages::{DocPage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DocsLayout)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        DocPage { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
