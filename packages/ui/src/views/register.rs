//! Registration page with email/password form.

use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn Register() -> Element {
    rsx! {
        Layout {
            title: "Create account",
            h1 { "Create account" }
            form {
                class: "stack",
                method: "post",
                action: "/register",
                input { r#type: "email", name: "email", placeholder: "Email", required: true }
                input { r#type: "password", name: "password", placeholder: "Password", required: true }
                button { class: "button primary", r#type: "submit", "Sign up" }
            }
            p {
                class: "hint",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
