use dioxus::prelude::*;

use crate::MAIN_CSS;

/// `<head>` and `<body>` shared by every page. The `<html>` wrapper is added
/// when the page is rendered.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx! {
        head {
            title { "{title} · Jotter" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            link { rel: "stylesheet", href: MAIN_CSS }
        }
        body {
            main {
                class: "container",
                {children}
            }
        }
    }
}
