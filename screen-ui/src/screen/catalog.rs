//! Per-kind presentation defaults: launcher icon and spawn geometry.

use screen_types::{
    PanelGeometry, PanelKind, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_X,
    DEFAULT_PANEL_Y,
};

pub fn panel_icon(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Dice => "🎲",
        PanelKind::Notes => "📝",
        PanelKind::CharacterSheet => "🪪",
        PanelKind::Npc => "🧑",
        PanelKind::Loot => "💰",
        PanelKind::Location => "🏙️",
        PanelKind::Netrun => "🖧",
        PanelKind::Timer => "⏱️",
        PanelKind::Initiative => "⚔️",
        PanelKind::Rumors => "🗣️",
        PanelKind::CriticalInjury => "🩸",
        PanelKind::Names => "🏷️",
        PanelKind::Encounters => "🚨",
        PanelKind::Rules => "📖",
        PanelKind::Shop => "🏪",
        PanelKind::Placeholder => "▦",
    }
}

/// Spawn geometry before cascade offset and viewport clamping. Most kinds
/// take the stock 400x300; the outliers are sized to their content.
pub fn default_geometry(kind: PanelKind) -> PanelGeometry {
    let (width, height) = match kind {
        PanelKind::Notes => (520, 420),
        PanelKind::CharacterSheet => (480, 560),
        PanelKind::Netrun => (420, 480),
        PanelKind::Timer => (260, 200),
        PanelKind::Initiative => (360, 420),
        PanelKind::Rules => (460, 520),
        _ => (DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT),
    };
    PanelGeometry {
        x: DEFAULT_PANEL_X,
        y: DEFAULT_PANEL_Y,
        width,
        height,
    }
}

/// Successive opens cascade down-right so panels do not stack exactly.
pub fn cascade_offset(open_count: usize) -> (i32, i32) {
    let step = (open_count % 8) as i32;
    (step * 24, step * 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_types::{MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};

    #[test]
    fn every_kind_has_an_icon_and_legal_default_size() {
        for kind in PanelKind::ALL.into_iter().chain([PanelKind::Placeholder]) {
            assert!(!panel_icon(kind).is_empty());
            let g = default_geometry(kind);
            assert!(g.width >= MIN_PANEL_WIDTH);
            assert!(g.height >= MIN_PANEL_HEIGHT);
        }
    }

    #[test]
    fn cascade_wraps_instead_of_marching_off_screen() {
        assert_eq!(cascade_offset(0), (0, 0));
        assert_eq!(cascade_offset(3), (72, 72));
        assert_eq!(cascade_offset(8), (0, 0));
    }
}
