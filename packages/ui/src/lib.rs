//! Server-rendered pages.
//!
//! Each page is a Dioxus component rendered once to an HTML string with
//! `dioxus-ssr`; no client runtime is shipped. Text is escaped by the renderer, so
//! note titles and bodies go in as-is.

use api::Note;
use dioxus::prelude::*;

mod layout;
pub mod views;

pub use layout::Layout;

/// Stylesheet path, served by the web crate from its public directory.
pub const MAIN_CSS: &str = "/public/main.css";

/// `GET /`
pub fn render_landing() -> String {
    finish(VirtualDom::new(views::Landing))
}

/// `GET /login`
pub fn render_login() -> String {
    finish(VirtualDom::new(views::Login))
}

/// `GET /register`
pub fn render_register() -> String {
    finish(VirtualDom::new(views::Register))
}

/// `GET /notes` for the signed-in `email`.
pub fn render_notes(email: String, notes: Vec<Note>) -> String {
    finish(VirtualDom::new_with_props(
        views::Notes,
        views::NotesProps { email, notes },
    ))
}

fn finish(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}
