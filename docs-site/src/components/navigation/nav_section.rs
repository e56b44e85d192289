use dioxus::prelude::*;

#[component]
pub fn NavSection(
    title: String,
    is_opened: bool,
    is_active: bool,
    is_new: bool,
    on_toggle: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut class = String::from("nav-section");
    if !is_opened {
        class.push_str(" collapsed");
    }
    if is_active {
        class.push_str(" active");
    }

    rsx! {
        div {
            class: "{class}",

            div {
                class: "nav-section-header",
                onclick: move |evt| on_toggle.call(evt),

                h4 { class: "nav-section-title", "{title}" }
                if is_new {
                    span { class: "badge-new", "NEW" }
                }
                span { class: "nav-section-toggle", "▼" }
            }

            div { class: "nav-section-content",
                {children}
            }
        }
    }
}
