//! Location generator panel.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use rand::prelude::IndexedRandom;
use rand::Rng;
use screen_types::{LocationSpot, Severity};

use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{push_saved, BrowserStorage, KEY_SAVED_LOCATIONS};

const NAME_FIRST: &[&str] = &[
    "The Rusted", "Neon", "Golden", "Silent", "Chrome", "Afterlife", "Static", "Velvet",
    "Hollow", "Burning",
];
const NAME_SECOND: &[&str] = &[
    "Lotus", "Dragon", "Circuit", "Halo", "Anchor", "Signal", "Garden", "Vault", "Spire",
    "Mile",
];
const DISTRICTS: &[&str] = &[
    "City Center", "Watson", "Westbrook", "Heywood", "Pacifica", "Santo Domingo", "the Badlands",
    "the Combat Zone",
];
const ATMOSPHERES: &[&str] = &[
    "thick with synth-smoke and bass",
    "unnervingly clean and quiet",
    "crowded, sweaty, half the lights dead",
    "freshly abandoned, drinks still on the tables",
    "guarded by bored private security",
    "lit entirely by vending machines",
];
const HOOKS: &[&str] = &[
    "the bartender is paying for protection nobody provides",
    "a fixer runs a dead-drop out of the back room",
    "two corp teams are surveilling it, not each other",
    "the basement door has a military-grade maglock",
    "everyone here owes the same loan shark",
    "last week's missing courier was a regular",
];

pub fn generate_location(rng: &mut impl Rng) -> LocationSpot {
    let first = NAME_FIRST.choose(rng).copied().unwrap_or("The Rusted");
    let second = NAME_SECOND.choose(rng).copied().unwrap_or("Anchor");
    LocationSpot {
        name: format!("{first} {second}"),
        district: DISTRICTS.choose(rng).copied().unwrap_or("Watson").to_string(),
        atmosphere: ATMOSPHERES.choose(rng).copied().unwrap_or("quiet").to_string(),
        hook: HOOKS.choose(rng).copied().unwrap_or("nothing obvious").to_string(),
    }
}

#[component]
pub fn LocationView() -> Element {
    let mut current = use_signal(|| None::<LocationSpot>);

    let generate = move |_| {
        current.set(Some(generate_location(&mut rand::rng())));
    };

    let save = move |_| {
        let Some(spot) = current() else {
            return;
        };
        let name = spot.name.clone();
        match push_saved(&BrowserStorage, KEY_SAVED_LOCATIONS, spot) {
            Ok(count) => notify(
                format!("{name} saved ({count} in collection)"),
                Severity::Success,
                DEFAULT_TOAST_MS,
            ),
            Err(err) => {
                tracing::error!("location save failed: {err}");
                notify(
                    format!("Could not save location: {err}"),
                    Severity::Error,
                    DEFAULT_TOAST_MS,
                );
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
                    "Generate location"
                }
                if current.read().is_some() {
                    button {
                        style: "padding: 0.4rem 1rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer;",
                        onclick: save,
                        "Save"
                    }
                }
            }

            if let Some(spot) = current() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    div {
                        style: "font-size: 1.2rem; font-weight: 700; color: var(--text-primary, #f8fafc);",
                        "{spot.name}"
                    }
                    div {
                        style: "color: var(--accent-bg, #3b82f6); font-weight: 600; font-size: 0.9rem;",
                        "{spot.district}"
                    }
                    div { style: "color: var(--text-secondary, #94a3b8); font-size: 0.9rem;", "{spot.atmosphere}" }
                    div { style: "color: var(--text-secondary, #94a3b8); font-size: 0.9rem; font-style: italic;", "Hook: {spot.hook}" }
                }
            } else {
                div {
                    style: "color: var(--text-muted, #64748b); font-size: 0.9rem;",
                    "Conjure a bar, den, or front for the next scene."
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
    fn generated_locations_draw_from_the_tables() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let spot = generate_location(&mut rng);
            let (first, second) = spot.name.rsplit_once(' ').unwrap();
            assert!(NAME_FIRST.contains(&first));
            assert!(NAME_SECOND.contains(&second));
            assert!(DISTRICTS.contains(&spot.district.as_str()));
            assert!(ATMOSPHERES.contains(&spot.atmosphere.as_str()));
            assert!(HOOKS.contains(&spot.hook.as_str()));
        }
    }
}
