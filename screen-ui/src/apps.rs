//! Panel content modules, dispatched by kind.

use dioxus::prelude::*;
use screen_types::PanelKind;

pub mod dice;
pub mod initiative;
pub mod location;
pub mod loot;
pub mod netrun;
pub mod notes;
pub mod npc;
pub mod rules;
pub mod sheet;
pub mod shop;
pub mod tables;
pub mod timer;

/// Single dispatch point from a panel record to its content view.
#[component]
pub fn PanelBody(panel_id: String, kind: PanelKind) -> Element {
    match kind {
        PanelKind::Dice => rsx! { dice::DiceView {} },
        PanelKind::Notes => rsx! { notes::NotesView {} },
        PanelKind::CharacterSheet => rsx! { sheet::SheetView { panel_id } },
        PanelKind::Npc => rsx! { npc::NpcView {} },
        PanelKind::Loot => rsx! { loot::LootView {} },
        PanelKind::Location => rsx! { location::LocationView {} },
        PanelKind::Netrun => rsx! { netrun::NetrunView {} },
        PanelKind::Timer => rsx! { timer::TimerView {} },
        PanelKind::Initiative => rsx! { initiative::InitiativeView {} },
        PanelKind::Rumors => rsx! { tables::TableRollerView { table: tables::TableId::Rumors } },
        PanelKind::CriticalInjury => {
            rsx! { tables::TableRollerView { table: tables::TableId::CriticalInjury } }
        }
        PanelKind::Names => rsx! { tables::TableRollerView { table: tables::TableId::Names } },
        PanelKind::Encounters => {
            rsx! { tables::TableRollerView { table: tables::TableId::Encounters } }
        }
        PanelKind::Rules => rsx! { rules::RulesView {} },
        PanelKind::Shop => rsx! { shop::ShopView {} },
        PanelKind::Placeholder => rsx! { PlaceholderView {} },
    }
}

#[component]
fn PlaceholderView() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #64748b); padding: 1rem; text-align: center;",
            "Nothing here yet"
        }
    }
}
