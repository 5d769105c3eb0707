use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use gloo_timers::future::TimeoutFuture;
use screen_types::{PanelGeometry, PanelRecord};
use wasm_bindgen::JsCast;

use crate::apps::PanelBody;
use crate::geometry::{
    clamp_geometry, nudge, resize_by, settle_interaction, InteractionMode, InteractionState,
    KEYBOARD_MOVE_STEP_PX, KEYBOARD_RESIZE_LARGE_STEP_PX, KEYBOARD_RESIZE_STEP_PX,
    PERSIST_INTERVAL_MS,
};
use crate::screen::catalog::panel_icon;

/// Close feedback runs this long before the record is removed.
const CLOSE_FEEDBACK_MS: u32 = 150;

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

fn pointer_target_is_panel_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".panel-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn capture_panel_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-panel").ok().flatten())
        .map(|panel| panel.set_pointer_capture(pointer_id));
}

fn release_panel_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-panel").ok().flatten())
        .map(|panel| panel.release_pointer_capture(pointer_id));
}

#[component]
pub fn FloatingPanel(
    panel: PanelRecord,
    is_active: bool,
    viewport: (u32, u32),
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, i32, i32)>,
    on_resize: Callback<(String, i32, i32)>,
) -> Element {
    let panel_id = panel.id.clone();
    let committed = clamp_geometry(panel.geometry, viewport);

    let mut interaction = use_signal(|| None::<InteractionState>);
    let mut live_geometry = use_signal(|| None::<PanelGeometry>);
    let mut queued = use_signal(|| None::<(InteractionMode, PanelGeometry)>);
    let mut flush_scheduled = use_signal(|| false);
    let mut last_sent_ms = use_signal(|| 0i64);
    let mut keyboard_resize = use_signal(|| false);
    let mut closing = use_signal(|| false);

    let geometry = live_geometry().unwrap_or(committed);

    let panel_id_for_focus = panel_id.clone();
    let panel_id_for_keyboard = panel_id.clone();
    let panel_id_for_pointer_move = panel_id.clone();
    let panel_id_for_pointer_up = panel_id.clone();
    let panel_id_for_pointer_cancel = panel_id.clone();
    let panel_id_for_title = panel_id.clone();
    let panel_id_for_resize = panel_id.clone();
    let panel_id_for_handle_key = panel_id.clone();
    let panel_id_for_close = panel_id.clone();

    let request_close = use_callback(move |id: String| {
        if closing() {
            return;
        }
        closing.set(true);
        spawn(async move {
            TimeoutFuture::new(CLOSE_FEEDBACK_MS).await;
            on_close.call(id);
        });
    });

    // One persisted registry write per coalescing window during drag or
    // resize; the live geometry still tracks the pointer every event.
    let flush_queued = use_callback(move |id: String| {
        let Some((mode, g)) = queued.write().take() else {
            return;
        };
        match mode {
            InteractionMode::Drag => on_move.call((id, g.x, g.y)),
            InteractionMode::Resize => on_resize.call((id, g.width, g.height)),
        }
        last_sent_ms.set(now_ms());
    });

    let z_index = panel.z_index;
    let active_outline = if is_active {
        "2px solid var(--accent-bg, #3b82f6)"
    } else {
        "none"
    };
    let closing_style = if closing() {
        "opacity: 0; transform: scale(0.97); transition: opacity 0.15s ease, transform 0.15s ease;"
    } else {
        ""
    };
    let panel_style = format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: \
         {z_index}; display: flex; flex-direction: column; background: var(--window-bg, \
         #1f2937); border: 1px solid var(--border-color, #374151); border-radius: \
         var(--radius-lg, 12px); overflow: hidden; box-shadow: var(--shadow-lg, 0 10px 40px \
         rgba(0,0,0,0.5)); outline: {active_outline}; {closing_style}",
        geometry.x, geometry.y, geometry.width, geometry.height
    );

    let on_panel_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::Escape {
            e.prevent_default();
            if keyboard_resize() {
                keyboard_resize.set(false);
                return;
            }
            if let Some(active) = interaction() {
                // Coalesced flushes may already have persisted mid-drag
                // coordinates; push the committed geometry back through
                // the same path so the registry record is restored too.
                let restored = settle_interaction(&active, None, true);
                queued.set(Some((active.mode, restored)));
                flush_queued.call(panel_id_for_keyboard.clone());
                live_geometry.set(None);
                interaction.set(None);
                return;
            }
            request_close.call(panel_id_for_keyboard.clone());
            return;
        }

        // Keyboard move: whole steps, clamped, persisted immediately.
        if modifiers.shift() && !modifiers.alt() && !modifiers.ctrl() && !keyboard_resize() {
            let (dx, dy) = match key {
                Key::ArrowLeft => (-KEYBOARD_MOVE_STEP_PX, 0),
                Key::ArrowRight => (KEYBOARD_MOVE_STEP_PX, 0),
                Key::ArrowUp => (0, -KEYBOARD_MOVE_STEP_PX),
                Key::ArrowDown => (0, KEYBOARD_MOVE_STEP_PX),
                _ => return,
            };
            e.prevent_default();
            let next = nudge(geometry, dx, dy, viewport);
            on_move.call((panel_id_for_keyboard.clone(), next.x, next.y));
        }
    };

    let on_handle_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::Enter || key == Key::Character(" ".to_string()) {
            e.prevent_default();
            e.stop_propagation();
            keyboard_resize.set(!keyboard_resize());
            return;
        }

        if !keyboard_resize() {
            return;
        }

        if key == Key::Escape {
            e.prevent_default();
            e.stop_propagation();
            keyboard_resize.set(false);
            return;
        }

        let step = if modifiers.shift() {
            KEYBOARD_RESIZE_LARGE_STEP_PX
        } else {
            KEYBOARD_RESIZE_STEP_PX
        };
        let (dw, dh) = match key {
            Key::ArrowLeft => (-step, 0),
            Key::ArrowRight => (step, 0),
            Key::ArrowUp => (0, -step),
            Key::ArrowDown => (0, step),
            _ => return,
        };
        e.prevent_default();
        e.stop_propagation();
        let next = resize_by(geometry, dw, dh, viewport);
        on_resize.call((panel_id_for_handle_key.clone(), next.width, next.height));
    };

    rsx! {
        div {
            class: if is_active { "floating-panel active" } else { "floating-panel" },
            id: "panel-{panel.id}",
            role: "dialog",
            "aria-label": panel.title.clone(),
            tabindex: "0",
            style: "{panel_style}",
            onclick: move |_| on_focus.call(panel_id_for_focus.clone()),
            onkeydown: on_panel_keydown,
            onpointermove: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }

                // Pointer capture can be lost across browser focus
                // transitions. No buttons held means the press ended.
                if pointer_buttons(&e) == 0 {
                    let settled = settle_interaction(&active, live_geometry(), false);
                    queued.set(Some((active.mode, settled)));
                    flush_queued.call(panel_id_for_pointer_move.clone());
                    live_geometry.set(None);
                    interaction.set(None);
                    return;
                }

                let (client_x, client_y) = pointer_point(&e);
                let Some(next) = active.target(client_x, client_y, viewport) else {
                    return;
                };

                live_geometry.set(Some(next));
                queued.set(Some((active.mode, next)));
                let elapsed = now_ms() - last_sent_ms();
                if elapsed >= PERSIST_INTERVAL_MS {
                    flush_queued.call(panel_id_for_pointer_move.clone());
                } else if !flush_scheduled() {
                    flush_scheduled.set(true);
                    let wait_ms = (PERSIST_INTERVAL_MS - elapsed).max(1) as u32;
                    let mut flush_scheduled_clone = flush_scheduled;
                    let flush_clone = flush_queued;
                    let panel_id_clone = panel_id_for_pointer_move.clone();
                    spawn(async move {
                        TimeoutFuture::new(wait_ms).await;
                        flush_clone.call(panel_id_clone);
                        flush_scheduled_clone.set(false);
                    });
                }
            },
            onpointerup: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_panel_pointer(&e, active.pointer_id);

                let settled = settle_interaction(&active, live_geometry(), false);
                queued.set(Some((active.mode, settled)));
                flush_queued.call(panel_id_for_pointer_up.clone());
                live_geometry.set(None);
                interaction.set(None);
            },
            onpointercancel: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_panel_pointer(&e, active.pointer_id);

                // Earlier coalesced flushes may have landed, so restoring
                // the rendered geometry is not enough: write the committed
                // geometry back to the registry as well.
                let restored = settle_interaction(&active, None, true);
                queued.set(Some((active.mode, restored)));
                flush_queued.call(panel_id_for_pointer_cancel.clone());
                live_geometry.set(None);
                interaction.set(None);
            },

            div {
                class: "panel-titlebar",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 0.85rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: grab; user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    if pointer_target_is_panel_control(&e) {
                        return;
                    }
                    if !is_active {
                        on_focus.call(panel_id_for_title.clone());
                    }
                    e.prevent_default();
                    capture_panel_pointer(&e, e.data().pointer_id());

                    let start = pointer_point(&e);
                    interaction.set(Some(InteractionState::begin(
                        InteractionMode::Drag,
                        e.data().pointer_id(),
                        start,
                        geometry,
                        committed,
                    )));
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; min-width: 0;",
                    span { style: "font-size: 1rem;", {panel_icon(panel.kind)} }
                    span {
                        style: "font-weight: 500; color: var(--text-primary, white); white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        "{panel.title}"
                    }
                }

                div {
                    class: "panel-controls",
                    style: "display: flex; align-items: center; gap: 0.25rem;",
                    button {
                        class: "panel-close",
                        style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #ef4444; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 1.25rem; line-height: 1;",
                        onpointerdown: move |e| e.stop_propagation(),
                        "aria-label": "Close panel",
                        onclick: move |e| {
                            e.stop_propagation();
                            request_close.call(panel_id_for_close.clone());
                        },
                        "×"
                    }
                }
            }

            div {
                class: "panel-content",
                style: "flex: 1; overflow: auto;",
                PanelBody {
                    key: "{panel.id}",
                    panel_id: panel.id.clone(),
                    kind: panel.kind,
                }
            }

            div {
                class: "resize-handle",
                tabindex: "0",
                role: "button",
                "aria-label": "Resize panel",
                "aria-pressed": if keyboard_resize() { "true" } else { "false" },
                style: if keyboard_resize() {
                    "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize; outline: 2px solid var(--accent-bg, #3b82f6);"
                } else {
                    "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize;"
                },
                onkeydown: on_handle_keydown,
                onblur: move |_| keyboard_resize.set(false),
                onpointerdown: move |e| {
                    if !is_active {
                        on_focus.call(panel_id_for_resize.clone());
                    }
                    e.prevent_default();
                    capture_panel_pointer(&e, e.data().pointer_id());

                    let start = pointer_point(&e);
                    interaction.set(Some(InteractionState::begin(
                        InteractionMode::Resize,
                        e.data().pointer_id(),
                        start,
                        geometry,
                        committed,
                    )));
                },
            }
        }
    }
}
