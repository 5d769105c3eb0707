//! Shared types for the GM screen
//!
//! Used by the panel manager (registry records, geometry) and by the
//! content modules (notes documents, character sheets, generator output).
//! Everything here is plain data: serializable with serde, testable on
//! the host without a browser.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Panel geometry
// ============================================================================

/// Hard minimums for any panel, in CSS pixels.
pub const MIN_PANEL_WIDTH: i32 = 200;
pub const MIN_PANEL_HEIGHT: i32 = 100;

/// Inset kept between a panel and every viewport edge.
pub const EDGE_INSET: i32 = 10;

pub const DEFAULT_PANEL_X: i32 = 100;
pub const DEFAULT_PANEL_Y: i32 = 100;
pub const DEFAULT_PANEL_WIDTH: i32 = 400;
pub const DEFAULT_PANEL_HEIGHT: i32 = 300;

/// Position and size of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            x: DEFAULT_PANEL_X,
            y: DEFAULT_PANEL_Y,
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
        }
    }
}

// ============================================================================
// Panel kinds
// ============================================================================

/// Closed set of panel content kinds. `Placeholder` backs the explicit
/// "default" tag; every other tag must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Dice,
    Notes,
    CharacterSheet,
    Npc,
    Loot,
    Location,
    Netrun,
    Timer,
    Initiative,
    Rumors,
    CriticalInjury,
    Names,
    Encounters,
    Rules,
    Shop,
    Placeholder,
}

impl PanelKind {
    pub const ALL: [PanelKind; 15] = [
        PanelKind::Dice,
        PanelKind::Notes,
        PanelKind::CharacterSheet,
        PanelKind::Npc,
        PanelKind::Loot,
        PanelKind::Location,
        PanelKind::Netrun,
        PanelKind::Timer,
        PanelKind::Initiative,
        PanelKind::Rumors,
        PanelKind::CriticalInjury,
        PanelKind::Names,
        PanelKind::Encounters,
        PanelKind::Rules,
        PanelKind::Shop,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PanelKind::Dice => "dice",
            PanelKind::Notes => "notes",
            PanelKind::CharacterSheet => "character-sheet",
            PanelKind::Npc => "npc",
            PanelKind::Loot => "loot",
            PanelKind::Location => "location",
            PanelKind::Netrun => "netrun",
            PanelKind::Timer => "timer",
            PanelKind::Initiative => "initiative",
            PanelKind::Rumors => "rumors",
            PanelKind::CriticalInjury => "critical-injury",
            PanelKind::Names => "names",
            PanelKind::Encounters => "encounters",
            PanelKind::Rules => "rules",
            PanelKind::Shop => "shop",
            PanelKind::Placeholder => "default",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Dice => "Dice Roller",
            PanelKind::Notes => "Notes",
            PanelKind::CharacterSheet => "Character Sheet",
            PanelKind::Npc => "NPC Generator",
            PanelKind::Loot => "Loot Generator",
            PanelKind::Location => "Location Generator",
            PanelKind::Netrun => "NET Architecture",
            PanelKind::Timer => "Game Timer",
            PanelKind::Initiative => "Initiative Tracker",
            PanelKind::Rumors => "Rumor Table",
            PanelKind::CriticalInjury => "Critical Injuries",
            PanelKind::Names => "Name Generator",
            PanelKind::Encounters => "Encounter Table",
            PanelKind::Rules => "Quick Rules",
            PanelKind::Shop => "Night Market",
            PanelKind::Placeholder => "Panel",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned for tags outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanelKind(pub String);

impl fmt::Display for UnknownPanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPanelKind {}

impl FromStr for PanelKind {
    type Err = UnknownPanelKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dice" => Ok(PanelKind::Dice),
            "notes" => Ok(PanelKind::Notes),
            "character-sheet" => Ok(PanelKind::CharacterSheet),
            "npc" => Ok(PanelKind::Npc),
            "loot" => Ok(PanelKind::Loot),
            "location" => Ok(PanelKind::Location),
            "netrun" => Ok(PanelKind::Netrun),
            "timer" => Ok(PanelKind::Timer),
            "initiative" => Ok(PanelKind::Initiative),
            "rumors" => Ok(PanelKind::Rumors),
            "critical-injury" => Ok(PanelKind::CriticalInjury),
            "names" => Ok(PanelKind::Names),
            "encounters" => Ok(PanelKind::Encounters),
            "rules" => Ok(PanelKind::Rules),
            "shop" => Ok(PanelKind::Shop),
            "default" => Ok(PanelKind::Placeholder),
            other => Err(UnknownPanelKind(other.to_string())),
        }
    }
}

// ============================================================================
// Panel records
// ============================================================================

/// One live panel as tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub id: String,
    pub kind: PanelKind,
    pub title: String,
    pub geometry: PanelGeometry,
    pub z_index: u32,
}

impl PanelRecord {
    pub fn new(kind: PanelKind, geometry: PanelGeometry, z_index: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: kind.title().to_string(),
            geometry,
            z_index,
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Notes
// ============================================================================

/// One notes document as stored under the notes storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

impl NoteDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            content: String::new(),
            last_modified: Utc::now(),
        }
    }
}

// ============================================================================
// Character sheet
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub intelligence: i32,
    pub reflexes: i32,
    pub dexterity: i32,
    pub technique: i32,
    pub cool: i32,
    pub willpower: i32,
    pub luck: i32,
    pub movement: i32,
    pub body: i32,
    pub empathy: i32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            intelligence: 5,
            reflexes: 5,
            dexterity: 5,
            technique: 5,
            cool: 5,
            willpower: 5,
            luck: 5,
            movement: 5,
            body: 5,
            empathy: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub id: String,
    pub handle: String,
    pub role: String,
    pub stats: CharacterStats,
    pub hit_points: i32,
    pub humanity: i32,
    pub armor: i32,
    pub notes: String,
}

impl CharacterSheet {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            handle: String::new(),
            role: String::new(),
            stats: CharacterStats::default(),
            hit_points: 40,
            humanity: 50,
            armor: 11,
            notes: String::new(),
        }
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Generators
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    pub name: String,
    pub role: String,
    pub demeanor: String,
    pub quirk: String,
    pub cyberware: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Value tiers for loot generation. Each tier caps the total haul value
/// and weights what rarities may appear at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueTier {
    Poor,
    Standard,
    Wealthy,
    Lavish,
}

impl ValueTier {
    pub const ALL: [ValueTier; 4] = [
        ValueTier::Poor,
        ValueTier::Standard,
        ValueTier::Wealthy,
        ValueTier::Lavish,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ValueTier::Poor => "Poor",
            ValueTier::Standard => "Standard",
            ValueTier::Wealthy => "Wealthy",
            ValueTier::Lavish => "Lavish",
        }
    }

    /// Maximum combined value of a generated haul, in eurobucks.
    pub fn value_cap(&self) -> i32 {
        match self {
            ValueTier::Poor => 500,
            ValueTier::Standard => 2_000,
            ValueTier::Wealthy => 10_000,
            ValueTier::Lavish => 50_000,
        }
    }

    /// Selection weights by rarity: common, uncommon, rare, legendary.
    /// A zero weight means that rarity can never be drawn for the tier.
    pub fn rarity_weights(&self) -> [u32; 4] {
        match self {
            ValueTier::Poor => [8, 2, 0, 0],
            ValueTier::Standard => [6, 3, 1, 0],
            ValueTier::Wealthy => [3, 4, 3, 1],
            ValueTier::Lavish => [1, 3, 4, 2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootItem {
    pub name: String,
    pub rarity: Rarity,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootHaul {
    pub tier: ValueTier,
    pub items: Vec<LootItem>,
    pub total_value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSpot {
    pub name: String,
    pub district: String,
    pub atmosphere: String,
    pub hook: String,
}

/// One floor of a generated NET architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetFloor {
    pub depth: u32,
    pub content: String,
    pub dv: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetTier {
    Basic,
    Standard,
    Uncommon,
    Advanced,
}

impl NetTier {
    pub const ALL: [NetTier; 4] = [
        NetTier::Basic,
        NetTier::Standard,
        NetTier::Uncommon,
        NetTier::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NetTier::Basic => "Basic",
            NetTier::Standard => "Standard",
            NetTier::Uncommon => "Uncommon",
            NetTier::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetArchitecture {
    pub name: String,
    pub tier: NetTier,
    pub floors: Vec<NetFloor>,
}

/// One combatant row in the initiative tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub initiative: i32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_kind_tags_round_trip() {
        for kind in PanelKind::ALL {
            let parsed: PanelKind = kind.tag().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!("default".parse::<PanelKind>(), Ok(PanelKind::Placeholder));
    }

    #[test]
    fn unknown_panel_kind_is_an_error() {
        let err = "jukebox".parse::<PanelKind>().unwrap_err();
        assert_eq!(err.0, "jukebox");
        assert!("".parse::<PanelKind>().is_err());
    }

    #[test]
    fn panel_record_ids_are_unique() {
        let a = PanelRecord::new(PanelKind::Dice, PanelGeometry::default(), 1);
        let b = PanelRecord::new(PanelKind::Dice, PanelGeometry::default(), 2);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID length
    }

    #[test]
    fn panel_record_serialization() {
        let record = PanelRecord::new(PanelKind::Netrun, PanelGeometry::default(), 7);
        let json = serde_json::to_string(&record).unwrap();
        let back: PanelRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn poor_tier_excludes_high_rarities() {
        let [_, _, rare, legendary] = ValueTier::Poor.rarity_weights();
        assert_eq!(rare, 0);
        assert_eq!(legendary, 0);
        assert_eq!(ValueTier::Poor.value_cap(), 500);
    }

    #[test]
    fn character_sheet_serialization() {
        let mut sheet = CharacterSheet::new();
        sheet.handle = "V".to_string();
        sheet.stats.reflexes = 8;
        let json = serde_json::to_string(&sheet).unwrap();
        let back: CharacterSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
