//! GM screen shell: launcher, panel canvas, status bar.

use dioxus::prelude::*;

pub mod actions;
pub mod catalog;
mod components;
mod shell;
pub mod state;
mod theme;

pub use shell::ScreenShell;

#[component]
pub fn Screen() -> Element {
    rsx! {
        ScreenShell {}
    }
}
