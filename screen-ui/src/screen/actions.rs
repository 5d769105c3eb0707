//! Panel lifecycle actions. Every entry point validates, mutates the
//! registry signal, and reports failures through the notification layer
//! instead of returning fatal errors.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use screen_types::{PanelKind, PanelRecord, Severity, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};

use crate::error::ScreenError;
use crate::geometry::clamp_geometry;
use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::screen::catalog::{cascade_offset, default_geometry};
use crate::screen::state::PanelRegistry;

/// Caller overrides for [`open_panel`]. Anything left `None` falls back to
/// the kind's catalog defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelOptions {
    pub title: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Validated blueprint for a new panel: the parsed kind, clamped spawn
/// geometry, and whether the requested size had to be raised to minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBlueprint {
    pub kind: PanelKind,
    pub geometry: screen_types::PanelGeometry,
    pub size_was_raised: bool,
}

/// Pure half of [`open_panel`]: parse the tag and work out spawn geometry.
pub fn plan_panel(
    kind_tag: &str,
    options: &PanelOptions,
    open_count: usize,
    viewport: (u32, u32),
) -> Result<PanelBlueprint, ScreenError> {
    if kind_tag.trim().is_empty() {
        return Err(ScreenError::Validation("no panel type given".into()));
    }
    let kind: PanelKind = kind_tag.parse()?;

    let mut geometry = default_geometry(kind);
    let (offset_x, offset_y) = cascade_offset(open_count);
    geometry.x = options.x.unwrap_or(geometry.x + offset_x);
    geometry.y = options.y.unwrap_or(geometry.y + offset_y);
    if let Some(width) = options.width {
        geometry.width = width;
    }
    if let Some(height) = options.height {
        geometry.height = height;
    }

    let size_was_raised = geometry.width < MIN_PANEL_WIDTH || geometry.height < MIN_PANEL_HEIGHT;
    Ok(PanelBlueprint {
        kind,
        geometry: clamp_geometry(geometry, viewport),
        size_was_raised,
    })
}

/// Create a panel from a kind tag. Returns the new panel id, or `None`
/// after notifying on any validation failure; the registry is untouched
/// on failure.
pub fn open_panel(
    registry: &mut Signal<PanelRegistry>,
    kind_tag: &str,
    options: PanelOptions,
    viewport: (u32, u32),
) -> Option<String> {
    let open_count = registry.read().len();
    let blueprint = match plan_panel(kind_tag, &options, open_count, viewport) {
        Ok(blueprint) => blueprint,
        Err(err) => {
            tracing::error!("panel open rejected: {err}");
            notify(
                format!("Failed to create panel: {err}"),
                Severity::Error,
                DEFAULT_TOAST_MS,
            );
            return None;
        }
    };

    if blueprint.size_was_raised {
        notify(
            format!("Panel size raised to the {MIN_PANEL_WIDTH}x{MIN_PANEL_HEIGHT} minimum"),
            Severity::Info,
            DEFAULT_TOAST_MS,
        );
    }

    let z_index = registry.write().next_z();
    let mut record = PanelRecord::new(blueprint.kind, blueprint.geometry, z_index);
    if let Some(title) = options.title {
        record.title = title;
    }
    let id = record.id.clone();
    tracing::info!("opening {} panel {}", blueprint.kind.tag(), id);
    registry.write().register(record);
    Some(id)
}

pub fn close_panel(registry: &mut Signal<PanelRegistry>, id: &str) {
    let title = registry.read().get(id).map(|p| p.title.clone());
    registry.write().unregister(id);
    if let Some(title) = title {
        tracing::info!("closed panel {id}");
        notify(format!("{title} closed"), Severity::Info, DEFAULT_TOAST_MS);
    }
}

pub fn focus_panel(registry: &mut Signal<PanelRegistry>, id: &str) {
    registry.write().bring_to_front(id);
}

pub fn move_panel(registry: &mut Signal<PanelRegistry>, id: &str, x: i32, y: i32) {
    registry.write().update_position(id, x, y);
}

pub fn resize_panel(registry: &mut Signal<PanelRegistry>, id: &str, width: i32, height: i32) {
    registry.write().update_size(id, width, height);
}

/// Re-clamp every panel after a viewport change so none end up stranded
/// outside the new bounds.
pub fn reclamp_all(registry: &mut Signal<PanelRegistry>, viewport: (u32, u32)) {
    let panels = registry.read().render_order();
    for panel in panels {
        let clamped = clamp_geometry(panel.geometry, viewport);
        if clamped != panel.geometry {
            let mut registry = registry.write();
            registry.update_position(&panel.id, clamped.x, clamped.y);
            registry.update_size(&panel.id, clamped.width, clamped.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_types::EDGE_INSET;

    const VIEWPORT: (u32, u32) = (1280, 720);

    #[test]
    fn empty_tag_is_a_validation_error() {
        let err = plan_panel("", &PanelOptions::default(), 0, VIEWPORT).unwrap_err();
        assert!(matches!(err, ScreenError::Validation(_)));
        let err = plan_panel("   ", &PanelOptions::default(), 0, VIEWPORT).unwrap_err();
        assert!(matches!(err, ScreenError::Validation(_)));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = plan_panel("jukebox", &PanelOptions::default(), 0, VIEWPORT).unwrap_err();
        assert!(matches!(err, ScreenError::UnknownKind(_)));
    }

    #[test]
    fn default_tag_falls_back_to_placeholder() {
        let blueprint = plan_panel("default", &PanelOptions::default(), 0, VIEWPORT).unwrap();
        assert_eq!(blueprint.kind, PanelKind::Placeholder);
    }

    #[test]
    fn sub_minimum_request_is_raised_and_flagged() {
        let options = PanelOptions {
            width: Some(50),
            height: Some(20),
            ..Default::default()
        };
        let blueprint = plan_panel("dice", &options, 0, VIEWPORT).unwrap();
        assert!(blueprint.size_was_raised);
        assert_eq!(blueprint.geometry.width, MIN_PANEL_WIDTH);
        assert_eq!(blueprint.geometry.height, MIN_PANEL_HEIGHT);
    }

    #[test]
    fn spawn_geometry_is_always_contained() {
        let options = PanelOptions {
            x: Some(-500),
            y: Some(9000),
            ..Default::default()
        };
        let blueprint = plan_panel("notes", &options, 0, VIEWPORT).unwrap();
        let g = blueprint.geometry;
        assert!(g.x >= EDGE_INSET && g.y >= EDGE_INSET);
        assert!(g.x + g.width <= VIEWPORT.0 as i32 - EDGE_INSET);
        assert!(g.y + g.height <= VIEWPORT.1 as i32 - EDGE_INSET);
    }

    #[test]
    fn cascade_moves_later_panels() {
        let first = plan_panel("dice", &PanelOptions::default(), 0, VIEWPORT).unwrap();
        let second = plan_panel("dice", &PanelOptions::default(), 1, VIEWPORT).unwrap();
        assert_ne!(
            (first.geometry.x, first.geometry.y),
            (second.geometry.x, second.geometry.y)
        );
    }
}
