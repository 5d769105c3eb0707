//! Shared roller over static tables. Backs the rumor, critical injury,
//! name, and encounter panels, which differ only in their table.

use dioxus::prelude::*;
use rand::prelude::IndexedRandom;
use rand::Rng;

const RESULT_HISTORY_CAP: usize = 5;

const RUMORS: &[&str] = &[
    "Trauma Team stopped answering calls in Pacifica after dark.",
    "A ripperdoc on Jig-Jig Street is installing corp-prototype chrome, cheap.",
    "The 6th Street Gang is quietly buying up water purifiers.",
    "Somebody flatlined a Netwatch agent and lived to brag about it.",
    "There's a braindance going around that shows a murder nobody reported.",
    "Militech convoys keep rerouting around a dead zone near the port.",
    "A fixer is paying triple for anyone who can read pre-collapse code.",
    "The Afterlife's new bartender used to run counterintel for Arasaka.",
];

const CRITICAL_INJURIES: &[&str] = &[
    "Broken ribs: -2 to MOVE checks until stabilized.",
    "Foreign object lodged: re-open wound on any BODY check until treated.",
    "Cracked skull: -2 to all actions; aimed head shots deal double damage.",
    "Torn muscle: -2 to melee attacks until surgery.",
    "Spinal injury: -4 to all actions next round, then -1 until treated.",
    "Crushed fingers: -4 to checks with that hand until surgery.",
    "Collapsed lung: -3 to MOVE until stabilized.",
    "Severed artery: death save every turn until stabilized.",
];

const NAMES: &[&str] = &[
    "Marisol \"Static\" Vega",
    "Deke Okonkwo",
    "Yuki Tanehara",
    "Crash Delacroix",
    "Imani Voss",
    "Booker Czerny",
    "Sable Reyes",
    "Anton \"Wires\" Malik",
    "Priya Okada",
    "Fitch Barrows",
];

const ENCOUNTERS: &[&str] = &[
    "A scav crew is stripping a still-occupied AV crash.",
    "Checkpoint ahead: bored corp security, one of them is on the take.",
    "Street preacher with a crowd, broadcasting on an encrypted channel.",
    "Two boostergangs negotiating a turf swap; it's going badly.",
    "A delivery drone crashed at your feet. The package is ticking.",
    "A cyberpsycho calmly orders noodles while MaxTac closes in.",
    "A kid flags you down: someone's locked in a cargo container.",
    "Blackout across three blocks. Looting starts in five minutes.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Rumors,
    CriticalInjury,
    Names,
    Encounters,
}

impl TableId {
    pub fn heading(&self) -> &'static str {
        match self {
            TableId::Rumors => "What's the word?",
            TableId::CriticalInjury => "Roll a critical injury",
            TableId::Names => "Need a name?",
            TableId::Encounters => "What's around the corner?",
        }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            TableId::Rumors => RUMORS,
            TableId::CriticalInjury => CRITICAL_INJURIES,
            TableId::Names => NAMES,
            TableId::Encounters => ENCOUNTERS,
        }
    }
}

pub fn roll_entry(table: TableId, rng: &mut impl Rng) -> &'static str {
    table.entries().choose(rng).copied().unwrap_or("")
}

#[component]
pub fn TableRollerView(table: TableId) -> Element {
    let mut results = use_signal(Vec::<&'static str>::new);

    let roll = move |_| {
        let entry = roll_entry(table, &mut rand::rng());
        results.with_mut(|r| {
            r.insert(0, entry);
            r.truncate(RESULT_HISTORY_CAP);
        });
    };

    let latest = results.read().first().copied();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%;",

            button {
                style: "align-self: flex-start; padding: 0.4rem 1rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                onclick: roll,
                "{table.heading()}"
            }

            if let Some(latest) = latest {
                div {
                    style: "padding: 0.75rem; border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); color: var(--text-primary, #f8fafc); font-size: 0.95rem; line-height: 1.4;",
                    "{latest}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 0.25rem; overflow-y: auto;",
                for (i, past) in results.read().iter().enumerate().skip(1) {
                    div {
                        key: "{i}",
                        style: "font-size: 0.8rem; color: var(--text-muted, #64748b);",
                        "{past}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const TABLES: [TableId; 4] = [
        TableId::Rumors,
        TableId::CriticalInjury,
        TableId::Names,
        TableId::Encounters,
    ];

    #[test]
    fn every_table_has_entries_and_a_heading() {
        for table in TABLES {
            assert!(!table.entries().is_empty());
            assert!(!table.heading().is_empty());
        }
    }

    #[test]
    fn rolls_come_from_the_right_table() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(41);
        for table in TABLES {
            for _ in 0..20 {
                let entry = roll_entry(table, &mut rng);
                assert!(table.entries().contains(&entry));
            }
        }
    }
}
