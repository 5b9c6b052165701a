//! Login page with email/password form.

use dioxus::prelude::*;

use crate::Layout;

/// Login page component. Failed attempts land back here without a reason.
#[component]
pub fn Login() -> Element {
    rsx! {
        Layout {
            title: "Sign in",
            h1 { "Sign in" }
            form {
                class: "stack",
                method: "post",
                action: "/login",
                input { r#type: "email", name: "email", placeholder: "Email", required: true }
                input { r#type: "password", name: "password", placeholder: "Password", required: true }
                button { class: "button primary", r#type: "submit", "Sign in" }
            }
            p {
                class: "hint",
                "No account yet? "
                a { href: "/register", "Create one" }
            }
        }
    }
}
