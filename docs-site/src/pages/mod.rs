use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        article { class: "doc-page",
            h1 { "简介" }
            p { "从左侧菜单选择一个章节开始阅读。" }
        }
    }
}

#[component]
pub fn DocPage(segments: Vec<String>) -> Element {
    let path = segments.join(" / ");

    rsx! {
        article { class: "doc-page",
            p { class: "doc-breadcrumb", "{path}" }
            h1 { {segments.last().cloned().unwrap_or_default()} }
        }
    }
}
