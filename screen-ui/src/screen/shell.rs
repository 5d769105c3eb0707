use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use screen_types::Severity;

use gloo_timers::future::TimeoutFuture;

use crate::interop::{focus_element, get_viewport_size, ViewportWatcher};
use crate::notify::{notify, ToastLayer};
use crate::panel::FloatingPanel;
use crate::screen::actions::{self, PanelOptions};
use crate::screen::components::launcher::Launcher;
use crate::screen::components::status_bar::StatusBar;
use crate::screen::state::PanelRegistry;
use crate::screen::theme::{
    apply_theme_to_document, cache_theme_preference, cached_theme_preference, next_theme,
    DEFAULT_THEME,
};
use crate::storage::{load_json, save_json, BrowserStorage, KEY_VISITED};

#[component]
pub fn ScreenShell() -> Element {
    let mut registry = use_signal(PanelRegistry::new);
    let mut viewport = use_signal(get_viewport_size);
    let mut current_theme = use_signal(|| DEFAULT_THEME.to_string());
    let viewport_watcher = use_hook(|| Rc::new(RefCell::new(None::<ViewportWatcher>)));

    let on_viewport_change = use_callback(move |size: (u32, u32)| {
        viewport.set(size);
        actions::reclamp_all(&mut registry, size);
    });

    {
        let viewport_watcher = viewport_watcher.clone();
        use_effect(move || {
            if viewport_watcher.borrow().is_none() {
                *viewport_watcher.borrow_mut() = ViewportWatcher::new(on_viewport_change);
            }
        });
    }

    {
        let viewport_watcher = viewport_watcher.clone();
        use_drop(move || {
            viewport_watcher.borrow_mut().take();
        });
    }

    use_effect(move || {
        let theme = cached_theme_preference(&BrowserStorage)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        apply_theme_to_document(&theme);
        current_theme.set(theme);
    });

    // One-time welcome on a fresh profile.
    use_effect(move || {
        if let Ok(None) = load_json::<bool>(&BrowserStorage, KEY_VISITED) {
            notify(
                "Welcome to the GM screen. Open tools from the bar above; \
                 drag titlebars to arrange them.",
                Severity::Info,
                6_000,
            );
            let _ = save_json(&BrowserStorage, KEY_VISITED, &true);
        }
    });

    let toggle_theme = use_callback(move |_| {
        let next = next_theme(&current_theme());
        apply_theme_to_document(&next);
        cache_theme_preference(&BrowserStorage, &next);
        current_theme.set(next);
    });

    let open_panel_cb = use_callback(move |kind_tag: String| {
        if let Some(id) =
            actions::open_panel(&mut registry, &kind_tag, PanelOptions::default(), viewport())
        {
            // Focus lands on the panel once it exists in the DOM.
            spawn(async move {
                TimeoutFuture::new(50).await;
                focus_element(&format!("panel-{id}"));
            });
        }
    });

    let close_panel_cb = use_callback(move |panel_id: String| {
        actions::close_panel(&mut registry, &panel_id);
    });

    let focus_panel_cb = use_callback(move |panel_id: String| {
        actions::focus_panel(&mut registry, &panel_id);
    });

    let move_panel_cb = use_callback(move |(panel_id, x, y): (String, i32, i32)| {
        actions::move_panel(&mut registry, &panel_id, x, y);
    });

    let resize_panel_cb = use_callback(move |(panel_id, width, height): (String, i32, i32)| {
        actions::resize_panel(&mut registry, &panel_id, width, height);
    });

    let panels = registry.read().render_order();
    let open_count = panels.len();
    let active_title = registry
        .read()
        .active_id()
        .and_then(|id| registry.read().get(id).map(|p| p.title.clone()));

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "screen-shell",
            style: "width: 100vw; height: 100dvh; display: flex; flex-direction: column; overflow: hidden;",

            Launcher {
                on_open: open_panel_cb,
            }

            div {
                class: "panel-canvas",
                style: "position: relative; flex: 1; overflow: hidden;",

                for panel in panels {
                    FloatingPanel {
                        key: "{panel.id}",
                        panel: panel.clone(),
                        is_active: registry.read().is_active(&panel.id),
                        viewport: viewport(),
                        on_close: close_panel_cb,
                        on_focus: focus_panel_cb,
                        on_move: move_panel_cb,
                        on_resize: resize_panel_cb,
                    }
                }

                if open_count == 0 {
                    div {
                        style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #64748b); font-size: 0.95rem;",
                        "Open a tool from the bar above to get started"
                    }
                }
            }

            StatusBar {
                open_count,
                active_title,
                current_theme: current_theme(),
                on_toggle_theme: toggle_theme,
            }
        }

        ToastLayer {}
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;

    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --launcher-bg: rgba(30, 41, 59, 0.8);
    --statusbar-bg: var(--bg-primary);
    --input-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;
    --success-bg: #10b981;
    --warning-bg: #f59e0b;

    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.3);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-bg-hover: #1d4ed8;
    --border-color: #cbd5e1;
    --titlebar-bg: #e2e8f0;
    --launcher-bg: rgba(255, 255, 255, 0.9);
    --statusbar-bg: #e2e8f0;
    --input-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.08);
    --danger-bg: #dc2626;
    --success-bg: #059669;
    --warning-bg: #d97706;
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.launcher-button:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.floating-panel:focus {
    outline-offset: -2px;
}

input, textarea, select {
    font-family: inherit;
}
"#;
