//! The signed-in user's notes and the form for adding one.

use api::Note;
use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn Notes(email: String, notes: Vec<Note>) -> Element {
    rsx! {
        Layout {
            title: "Notes",
            header {
                class: "bar",
                h1 { "Notes" }
                span { class: "who", "{email}" }
                a { class: "button", href: "/logout", "Log out" }
            }

            form {
                class: "stack",
                method: "post",
                action: "/notes",
                input { r#type: "text", name: "title", placeholder: "Title", required: true }
                textarea { name: "content", rows: "4", placeholder: "Write something…", required: true }
                button { class: "button primary", r#type: "submit", "Add note" }
            }

            if notes.is_empty() {
                p { class: "hint", "No notes yet." }
            } else {
                ul {
                    class: "notes",
                    for note in notes.iter() {
                        li {
                            key: "{note.id}",
                            h3 { "{note.title}" }
                            p { "{note.content}" }
                        }
                    }
                }
            }
        }
    }
}
