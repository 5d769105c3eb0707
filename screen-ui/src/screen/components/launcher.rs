use dioxus::prelude::*;
use screen_types::PanelKind;

use crate::screen::catalog::panel_icon;

/// Toolbar of one button per panel kind.
#[component]
pub fn Launcher(on_open: Callback<String>) -> Element {
    rsx! {
        div {
            class: "launcher",
            role: "toolbar",
            "aria-label": "Open panels",
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: 0.25rem; padding: 0.5rem 0.75rem; background: var(--launcher-bg, rgba(30, 41, 59, 0.8)); border-bottom: 1px solid var(--border-color, #334155);",

            for kind in PanelKind::ALL {
                LauncherButton {
                    kind,
                    on_open,
                }
            }
        }
    }
}

#[component]
fn LauncherButton(kind: PanelKind, on_open: Callback<String>) -> Element {
    rsx! {
        button {
            class: "launcher-button",
            style: "display: flex; align-items: center; gap: 0.35rem; padding: 0.35rem 0.6rem; background: transparent; color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 0.85rem;",
            "aria-label": "Open {kind.title()}",
            onclick: move |_| on_open.call(kind.tag().to_string()),

            span { {panel_icon(kind)} }
            span { "{kind.title()}" }
        }
    }
}
