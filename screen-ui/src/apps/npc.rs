//! NPC generator panel.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use rand::prelude::IndexedRandom;
use rand::Rng;
use screen_types::{NpcProfile, Severity};

use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{push_saved, BrowserStorage, KEY_SAVED_NPCS};

const FIRST_NAMES: &[&str] = &[
    "Dex", "Rogue", "Santo", "Kerry", "Vik", "Judy", "Panam", "Lizzy", "Royce", "Meredith",
    "Goro", "Evelyn", "Jackie", "Misty", "Wakako", "Sandra",
];

const SURNAMES: &[&str] = &[
    "Mercer", "Alvarez", "Okada", "Voss", "Delacroix", "Kuznetsov", "Nguyen", "Castillo",
    "Bartmoss", "Reyes", "Tanaka", "Whitmore",
];

const ROLES: &[&str] = &[
    "Fixer", "Solo", "Netrunner", "Tech", "Medtech", "Media", "Exec", "Lawman", "Nomad",
    "Rockerboy",
];

const DEMEANORS: &[&str] = &[
    "coldly professional",
    "twitchy and paranoid",
    "disarmingly friendly",
    "bored, seen it all",
    "aggressively cheerful",
    "quietly menacing",
    "desperate to impress",
];

const QUIRKS: &[&str] = &[
    "never blinks during conversation",
    "collects pre-war vinyl",
    "quotes corporate slogans ironically",
    "feeds every stray cat in the district",
    "owes money to three different fixers",
    "refuses to ride AVs",
    "keeps a paper notebook of names",
];

const CYBERWARE: &[&str] = &[
    "mirrored Kiroshi optics",
    "a visibly scarred neural port",
    "chromed right arm with etched serials",
    "subdermal armor ridges along the jaw",
    "a flickering holo-tattoo",
    "no visible chrome at all",
];

pub fn generate_npc(rng: &mut impl Rng) -> NpcProfile {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Nova");
    let last = SURNAMES.choose(rng).copied().unwrap_or("Mercer");
    NpcProfile {
        name: format!("{first} {last}"),
        role: ROLES.choose(rng).copied().unwrap_or("Solo").to_string(),
        demeanor: DEMEANORS.choose(rng).copied().unwrap_or("wary").to_string(),
        quirk: QUIRKS.choose(rng).copied().unwrap_or("unremarkable").to_string(),
        cyberware: CYBERWARE.choose(rng).copied().unwrap_or("none").to_string(),
    }
}

#[component]
pub fn NpcView() -> Element {
    let mut current = use_signal(|| None::<NpcProfile>);

    let generate = move |_| {
        current.set(Some(generate_npc(&mut rand::rng())));
    };

    let save = move |_| {
        let Some(npc) = current() else {
            return;
        };
        let name = npc.name.clone();
        match push_saved(&BrowserStorage, KEY_SAVED_NPCS, npc) {
            Ok(count) => notify(
                format!("{name} saved ({count} in collection)"),
                Severity::Success,
                DEFAULT_TOAST_MS,
            ),
            Err(err) => {
                tracing::error!("npc save failed: {err}");
                notify(format!("Could not save NPC: {err}"), Severity::Error, DEFAULT_TOAST_MS);
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%;",

            div {
                style: "display: flex; gap: 0.5rem;",
                button {
                    style: "padding: 0.4rem 1rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                    onclick: generate,
                    "Generate NPC"
                }
                if current.read().is_some() {
                    button {
                        style: "padding: 0.4rem 1rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer;",
                        onclick: save,
                        "Save"
                    }
                }
            }

            if let Some(npc) = current() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    div {
                        style: "font-size: 1.2rem; font-weight: 700; color: var(--text-primary, #f8fafc);",
                        "{npc.name}"
                    }
                    div {
                        style: "color: var(--accent-bg, #3b82f6); font-weight: 600; font-size: 0.9rem;",
                        "{npc.role}"
                    }
                    div { style: "color: var(--text-secondary, #94a3b8); font-size: 0.9rem;", "Demeanor: {npc.demeanor}" }
                    div { style: "color: var(--text-secondary, #94a3b8); font-size: 0.9rem;", "Quirk: {npc.quirk}" }
                    div { style: "color: var(--text-secondary, #94a3b8); font-size: 0.9rem;", "Cyberware: {npc.cyberware}" }
                }
            } else {
                div {
                    style: "color: var(--text-muted, #64748b); font-size: 0.9rem;",
                    "Roll up a contact, mark, or complication."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generated_npcs_draw_from_the_tables() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let npc = generate_npc(&mut rng);
            let (first, last) = npc.name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(SURNAMES.contains(&last));
            assert!(ROLES.contains(&npc.role.as_str()));
            assert!(DEMEANORS.contains(&npc.demeanor.as_str()));
            assert!(QUIRKS.contains(&npc.quirk.as_str()));
            assert!(CYBERWARE.contains(&npc.cyberware.as_str()));
        }
    }

    #[test]
    fn different_seeds_vary_output() {
        let mut a = rand::rngs::StdRng::seed_from_u64(1);
        let mut b = rand::rngs::StdRng::seed_from_u64(2);
        let npcs_a: Vec<NpcProfile> = (0..5).map(|_| generate_npc(&mut a)).collect();
        let npcs_b: Vec<NpcProfile> = (0..5).map(|_| generate_npc(&mut b)).collect();
        assert_ne!(npcs_a, npcs_b);
    }
}
