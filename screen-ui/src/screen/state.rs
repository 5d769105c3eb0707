//! Panel registry: the single owned store of live panels.
//!
//! Held in a signal by the shell and passed down; every structural change
//! (open/close/focus/move/resize) goes through these mutators, and the
//! keyed rsx loop over [`PanelRegistry::render_order`] is the only thing
//! that materializes panel DOM nodes, so records and nodes cannot diverge.

use std::collections::HashMap;

use screen_types::PanelRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelRegistry {
    panels: HashMap<String, PanelRecord>,
    last_z: u32,
    active: Option<String>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PanelRecord> {
        self.panels.get(id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Strictly increasing, never reused, even across unregister.
    pub fn next_z(&mut self) -> u32 {
        self.last_z += 1;
        self.last_z
    }

    /// Insert a record and make it the active panel.
    pub fn register(&mut self, record: PanelRecord) {
        self.active = Some(record.id.clone());
        self.panels.insert(record.id.clone(), record);
    }

    /// Remove a record. Unknown ids are a no-op, so double-close is safe.
    /// If the active panel goes away, the topmost survivor takes over.
    pub fn unregister(&mut self, id: &str) {
        self.panels.remove(id);
        if self.active.as_deref() == Some(id) {
            self.active = self
                .panels
                .values()
                .max_by_key(|p| p.z_index)
                .map(|p| p.id.clone());
        }
    }

    pub fn bring_to_front(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        let z = self.next_z();
        if let Some(panel) = self.panels.get_mut(id) {
            panel.z_index = z;
        }
        self.active = Some(id.to_string());
    }

    pub fn update_position(&mut self, id: &str, x: i32, y: i32) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.geometry.x = x;
            panel.geometry.y = y;
        }
    }

    pub fn update_size(&mut self, id: &str, width: i32, height: i32) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.geometry.width = width;
            panel.geometry.height = height;
        }
    }

    /// Panels in ascending z order, for a stable keyed render loop.
    pub fn render_order(&self) -> Vec<PanelRecord> {
        let mut panels: Vec<PanelRecord> = self.panels.values().cloned().collect();
        panels.sort_by_key(|p| p.z_index);
        panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_types::{PanelGeometry, PanelKind};

    fn record(kind: PanelKind, z: u32) -> PanelRecord {
        PanelRecord::new(kind, PanelGeometry::default(), z)
    }

    #[test]
    fn next_z_is_strictly_increasing_and_never_reused() {
        let mut registry = PanelRegistry::new();
        let a = record(PanelKind::Dice, 0);
        let a_id = a.id.clone();
        registry.register(a);
        let z1 = registry.next_z();
        registry.unregister(&a_id);
        let z2 = registry.next_z();
        assert!(z2 > z1);
    }

    #[test]
    fn register_makes_panel_active() {
        let mut registry = PanelRegistry::new();
        let r = record(PanelKind::Notes, 1);
        let id = r.id.clone();
        registry.register(r);
        assert!(registry.is_active(&id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = PanelRegistry::new();
        let r = record(PanelKind::Timer, 1);
        let id = r.id.clone();
        registry.register(r);
        registry.unregister(&id);
        registry.unregister(&id);
        assert!(registry.is_empty());
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn closing_active_panel_promotes_topmost_survivor() {
        let mut registry = PanelRegistry::new();
        let below = record(PanelKind::Npc, 1);
        let below_id = below.id.clone();
        registry.register(below);
        let top = record(PanelKind::Loot, 2);
        let top_id = top.id.clone();
        registry.register(top);

        registry.unregister(&top_id);
        assert_eq!(registry.active_id(), Some(below_id.as_str()));
    }

    #[test]
    fn bring_to_front_raises_above_all_others() {
        let mut registry = PanelRegistry::new();
        let first = record(PanelKind::Dice, 0);
        let first_id = first.id.clone();
        registry.register(first);
        registry.bring_to_front(&first_id);
        let second = record(PanelKind::Notes, 0);
        let second_id = second.id.clone();
        registry.register(second);
        registry.bring_to_front(&second_id);

        registry.bring_to_front(&first_id);
        let order = registry.render_order();
        assert_eq!(order.last().map(|p| p.id.as_str()), Some(first_id.as_str()));
        assert!(registry.is_active(&first_id));
    }

    #[test]
    fn bring_to_front_ignores_unknown_ids() {
        let mut registry = PanelRegistry::new();
        registry.bring_to_front("missing");
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn geometry_updates_only_touch_the_named_panel() {
        let mut registry = PanelRegistry::new();
        let a = record(PanelKind::Dice, 1);
        let a_id = a.id.clone();
        registry.register(a);
        let b = record(PanelKind::Notes, 2);
        let b_id = b.id.clone();
        registry.register(b);

        registry.update_position(&a_id, 50, 60);
        registry.update_size(&a_id, 320, 240);

        let a = registry.get(&a_id).unwrap();
        assert_eq!((a.geometry.x, a.geometry.y), (50, 60));
        assert_eq!((a.geometry.width, a.geometry.height), (320, 240));

        let b = registry.get(&b_id).unwrap();
        assert_eq!(b.geometry, PanelGeometry::default());
    }
}
