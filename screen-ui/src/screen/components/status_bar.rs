use dioxus::prelude::*;

#[component]
pub fn StatusBar(
    open_count: usize,
    active_title: Option<String>,
    current_theme: String,
    on_toggle_theme: Callback<()>,
) -> Element {
    let panel_word = if open_count == 1 { "panel" } else { "panels" };
    let theme_label = if current_theme == "light" {
        "Switch to dark theme"
    } else {
        "Switch to light theme"
    };
    let theme_glyph = if current_theme == "light" { "🌙" } else { "☀️" };

    rsx! {
        div {
            class: "status-bar",
            style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.4rem 0.75rem; background: var(--statusbar-bg, #0f172a); border-top: 1px solid var(--border-color, #334155); font-size: 0.8rem; color: var(--text-secondary, #94a3b8);",

            span { "{open_count} {panel_word} open" }

            if let Some(title) = active_title {
                span {
                    style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "Active: {title}"
                }
            }

            button {
                style: "background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); padding: 0.2rem 0.5rem; cursor: pointer;",
                "aria-label": theme_label,
                onclick: move |_| on_toggle_theme.call(()),
                {theme_glyph}
            }
        }
    }
}
