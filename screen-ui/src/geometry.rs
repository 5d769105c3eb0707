//! Pure geometry and interaction math for floating panels.
//!
//! Everything here is host-testable: no DOM, no signals. The panel
//! component feeds pointer/keyboard input through these functions and
//! applies the returned geometry.

use screen_types::{PanelGeometry, EDGE_INSET, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};

pub const DRAG_THRESHOLD_PX: i32 = 4;
pub const KEYBOARD_MOVE_STEP_PX: i32 = 10;
pub const KEYBOARD_RESIZE_STEP_PX: i32 = 10;
pub const KEYBOARD_RESIZE_LARGE_STEP_PX: i32 = 40;
/// Registry writes during drag/resize are coalesced to one per frame.
pub const PERSIST_INTERVAL_MS: i64 = 16;

/// Force a geometry fully inside the viewport, `EDGE_INSET` px from every
/// edge, after raising the size to the panel minimums. Dimensions larger
/// than the inset viewport are capped so containment stays satisfiable.
pub fn clamp_geometry(geometry: PanelGeometry, viewport: (u32, u32)) -> PanelGeometry {
    let (vw, vh) = (viewport.0 as i32, viewport.1 as i32);

    let width_cap = (vw - 2 * EDGE_INSET).max(MIN_PANEL_WIDTH);
    let height_cap = (vh - 2 * EDGE_INSET).max(MIN_PANEL_HEIGHT);
    let width = geometry.width.max(MIN_PANEL_WIDTH).min(width_cap);
    let height = geometry.height.max(MIN_PANEL_HEIGHT).min(height_cap);

    let max_x = (vw - width - EDGE_INSET).max(EDGE_INSET);
    let max_y = (vh - height - EDGE_INSET).max(EDGE_INSET);
    let x = geometry.x.max(EDGE_INSET).min(max_x);
    let y = geometry.y.max(EDGE_INSET).min(max_y);

    PanelGeometry {
        x,
        y,
        width,
        height,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    Drag,
    Resize,
}

/// Live pointer interaction. `committed_geometry` is the last persisted
/// geometry, restored verbatim on pointer-cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub mode: InteractionMode,
    pub pointer_id: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_geometry: PanelGeometry,
    pub committed_geometry: PanelGeometry,
}

impl InteractionState {
    pub fn begin(
        mode: InteractionMode,
        pointer_id: i32,
        start: (i32, i32),
        start_geometry: PanelGeometry,
        committed_geometry: PanelGeometry,
    ) -> Self {
        Self {
            mode,
            pointer_id,
            start_x: start.0,
            start_y: start.1,
            start_geometry,
            committed_geometry,
        }
    }

    /// Clamped geometry for a pointer at `(client_x, client_y)`, or `None`
    /// while the pointer is still inside the drag threshold.
    pub fn target(&self, client_x: i32, client_y: i32, viewport: (u32, u32)) -> Option<PanelGeometry> {
        let dx = client_x - self.start_x;
        let dy = client_y - self.start_y;
        if dx.abs() < DRAG_THRESHOLD_PX && dy.abs() < DRAG_THRESHOLD_PX {
            return None;
        }

        let raw = match self.mode {
            InteractionMode::Drag => PanelGeometry {
                x: self.start_geometry.x + dx,
                y: self.start_geometry.y + dy,
                ..self.start_geometry
            },
            InteractionMode::Resize => PanelGeometry {
                width: self.start_geometry.width + dx,
                height: self.start_geometry.height + dy,
                ..self.start_geometry
            },
        };
        Some(clamp_geometry(raw, viewport))
    }
}

/// Geometry to persist when an interaction ends. A cancelled interaction
/// restores the committed geometry no matter how far the pointer got; a
/// completed one keeps the last live target.
pub fn settle_interaction(
    state: &InteractionState,
    live: Option<PanelGeometry>,
    cancelled: bool,
) -> PanelGeometry {
    if cancelled {
        state.committed_geometry
    } else {
        live.unwrap_or(state.start_geometry)
    }
}

/// Keyboard move: shift the panel by a whole step and clamp.
pub fn nudge(geometry: PanelGeometry, dx: i32, dy: i32, viewport: (u32, u32)) -> PanelGeometry {
    clamp_geometry(
        PanelGeometry {
            x: geometry.x + dx,
            y: geometry.y + dy,
            ..geometry
        },
        viewport,
    )
}

/// Keyboard resize: grow or shrink by a whole step and clamp.
pub fn resize_by(geometry: PanelGeometry, dw: i32, dh: i32, viewport: (u32, u32)) -> PanelGeometry {
    clamp_geometry(
        PanelGeometry {
            width: geometry.width + dw,
            height: geometry.height + dh,
            ..geometry
        },
        viewport,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (u32, u32) = (1280, 720);

    fn contained(g: PanelGeometry, viewport: (u32, u32)) -> bool {
        g.x >= EDGE_INSET
            && g.y >= EDGE_INSET
            && g.x + g.width <= viewport.0 as i32 - EDGE_INSET
            && g.y + g.height <= viewport.1 as i32 - EDGE_INSET
    }

    #[test]
    fn clamp_raises_sub_minimum_sizes() {
        let clamped = clamp_geometry(
            PanelGeometry {
                x: 100,
                y: 100,
                width: 50,
                height: 20,
            },
            VIEWPORT,
        );
        assert_eq!(clamped.width, MIN_PANEL_WIDTH);
        assert_eq!(clamped.height, MIN_PANEL_HEIGHT);
    }

    #[test]
    fn clamp_keeps_panel_fully_inside_viewport() {
        for (x, y) in [(-999, -999), (9999, 9999), (1200, 10), (10, 700)] {
            let clamped = clamp_geometry(
                PanelGeometry {
                    x,
                    y,
                    width: 400,
                    height: 300,
                },
                VIEWPORT,
            );
            assert!(contained(clamped, VIEWPORT), "escaped at ({x}, {y}): {clamped:?}");
        }
    }

    #[test]
    fn clamp_caps_oversized_panels_to_inset_viewport() {
        let clamped = clamp_geometry(
            PanelGeometry {
                x: 0,
                y: 0,
                width: 5000,
                height: 5000,
            },
            VIEWPORT,
        );
        assert_eq!(clamped.width, 1280 - 2 * EDGE_INSET);
        assert_eq!(clamped.height, 720 - 2 * EDGE_INSET);
        assert!(contained(clamped, VIEWPORT));
    }

    #[test]
    fn drag_below_threshold_produces_no_target() {
        let state = InteractionState::begin(
            InteractionMode::Drag,
            1,
            (500, 500),
            PanelGeometry::default(),
            PanelGeometry::default(),
        );
        assert_eq!(state.target(502, 503, VIEWPORT), None);
        assert!(state.target(505, 500, VIEWPORT).is_some());
    }

    #[test]
    fn drag_applies_delta_from_start_geometry() {
        let start = PanelGeometry {
            x: 100,
            y: 100,
            width: 400,
            height: 300,
        };
        let state = InteractionState::begin(InteractionMode::Drag, 1, (500, 500), start, start);
        let target = state.target(530, 480, VIEWPORT).unwrap();
        assert_eq!((target.x, target.y), (130, 80));
        assert_eq!((target.width, target.height), (400, 300));
    }

    #[test]
    fn resize_never_goes_below_minimums() {
        let start = PanelGeometry {
            x: 100,
            y: 100,
            width: 400,
            height: 300,
        };
        let state = InteractionState::begin(InteractionMode::Resize, 1, (500, 500), start, start);
        let target = state.target(-2000, -2000, VIEWPORT).unwrap();
        assert_eq!(target.width, MIN_PANEL_WIDTH);
        assert_eq!(target.height, MIN_PANEL_HEIGHT);
        assert_eq!((target.x, target.y), (100, 100));
    }

    #[test]
    fn cancel_restores_the_committed_geometry_after_mid_drag_writes() {
        let committed = PanelGeometry {
            x: 100,
            y: 100,
            width: 400,
            height: 300,
        };
        let state =
            InteractionState::begin(InteractionMode::Drag, 1, (500, 500), committed, committed);

        // Coalesced flushes persist each intermediate target during the drag.
        let mut persisted = committed;
        let mut live = None;
        for (cx, cy) in [(540, 500), (580, 520), (620, 540)] {
            if let Some(target) = state.target(cx, cy, VIEWPORT) {
                live = Some(target);
                persisted = target;
            }
        }
        assert_ne!(persisted, committed);

        persisted = settle_interaction(&state, live, true);
        assert_eq!(persisted, committed);
    }

    #[test]
    fn completed_interaction_settles_to_the_last_target() {
        let start = PanelGeometry {
            x: 100,
            y: 100,
            width: 400,
            height: 300,
        };
        let state = InteractionState::begin(InteractionMode::Drag, 1, (500, 500), start, start);
        let live = state.target(620, 540, VIEWPORT);
        assert_eq!(settle_interaction(&state, live, false), live.unwrap());

        // A press that never crossed the threshold settles where it began.
        assert_eq!(settle_interaction(&state, None, false), start);
    }

    #[test]
    fn nudge_clamps_at_edges() {
        let at_edge = PanelGeometry {
            x: EDGE_INSET,
            y: EDGE_INSET,
            width: 400,
            height: 300,
        };
        let moved = nudge(at_edge, -KEYBOARD_MOVE_STEP_PX, -KEYBOARD_MOVE_STEP_PX, VIEWPORT);
        assert_eq!((moved.x, moved.y), (EDGE_INSET, EDGE_INSET));

        let moved = nudge(at_edge, KEYBOARD_MOVE_STEP_PX, 0, VIEWPORT);
        assert_eq!(moved.x, EDGE_INSET + KEYBOARD_MOVE_STEP_PX);
    }

    #[test]
    fn keyboard_resize_steps_clamp_like_pointer_resize() {
        let g = PanelGeometry {
            x: 100,
            y: 100,
            width: MIN_PANEL_WIDTH,
            height: MIN_PANEL_HEIGHT,
        };
        let shrunk = resize_by(g, -KEYBOARD_RESIZE_LARGE_STEP_PX, -KEYBOARD_RESIZE_LARGE_STEP_PX, VIEWPORT);
        assert_eq!(shrunk.width, MIN_PANEL_WIDTH);
        assert_eq!(shrunk.height, MIN_PANEL_HEIGHT);

        let grown = resize_by(g, KEYBOARD_RESIZE_STEP_PX, KEYBOARD_RESIZE_STEP_PX, VIEWPORT);
        assert_eq!(grown.width, MIN_PANEL_WIDTH + KEYBOARD_RESIZE_STEP_PX);
    }
}
