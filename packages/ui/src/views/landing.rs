use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn Landing() -> Element {
    rsx! {
        Layout {
            title: "Welcome",
            h1 { "Jotter" }
            p { class: "lead", "A private place for short notes." }
            div {
                class: "actions",
                a { class: "button primary", href: "/register", "Create account" }
                a { class: "button", href: "/login", "Sign in" }
            }
        }
    }
}
