//! NET architecture generator panel.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use rand::prelude::IndexedRandom;
use rand::Rng;
use screen_types::{NetArchitecture, NetFloor, NetTier, Severity};

use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{push_saved, BrowserStorage, KEY_SAVED_ARCHITECTURES};

pub const MIN_FLOORS: usize = 3;
pub const MAX_FLOORS: usize = 8;

const ARCH_OWNERS: &[&str] = &[
    "Biotechnica", "Militech", "Zetatech", "Night Corp", "Trauma Team", "a local gang",
    "an anonymous fixer", "a dead netrunner",
];
const ARCH_PURPOSES: &[&str] = &[
    "warehouse grid", "payroll node", "clinic records", "black site uplink", "traffic subnet",
    "private archive",
];

const LOBBY_FLOORS: &[&str] = &["Password gate", "File: shipping manifests", "Control: door locks"];

fn ice_pool(tier: NetTier) -> &'static [&'static str] {
    match tier {
        NetTier::Basic => &["ICE: Wisp", "ICE: Asp", "File: junk data"],
        NetTier::Standard => &["ICE: Killer", "ICE: Skunk", "File: camera logs", "Control: cameras"],
        NetTier::Uncommon => &[
            "ICE: Raven",
            "ICE: Hellhound",
            "File: encrypted ledgers",
            "Control: turrets",
        ],
        NetTier::Advanced => &[
            "ICE: Kraken",
            "ICE: Dragon",
            "File: blackmail archive",
            "Control: full facility",
        ],
    }
}

fn base_dv(tier: NetTier) -> u32 {
    match tier {
        NetTier::Basic => 6,
        NetTier::Standard => 8,
        NetTier::Uncommon => 10,
        NetTier::Advanced => 12,
    }
}

/// Deeper floors are always at least as hard as shallower ones.
fn floor_dv(tier: NetTier, depth: u32, rng: &mut impl Rng) -> u32 {
    base_dv(tier) + depth / 2 + rng.random_range(0..=1)
}

pub fn generate_architecture(tier: NetTier, rng: &mut impl Rng) -> NetArchitecture {
    let owner = ARCH_OWNERS.choose(rng).copied().unwrap_or("a ghost corp");
    let purpose = ARCH_PURPOSES.choose(rng).copied().unwrap_or("archive");
    let floor_count = rng.random_range(MIN_FLOORS..=MAX_FLOORS);

    let mut floors = Vec::with_capacity(floor_count);
    let mut min_dv = 0;
    for depth in 1..=floor_count as u32 {
        let content = if depth <= 2 {
            LOBBY_FLOORS.choose(rng).copied().unwrap_or("Password gate")
        } else {
            ice_pool(tier).choose(rng).copied().unwrap_or("ICE: Wisp")
        };
        let dv = floor_dv(tier, depth, rng).max(min_dv);
        min_dv = dv;
        floors.push(NetFloor {
            depth,
            content: content.to_string(),
            dv,
        });
    }

    NetArchitecture {
        name: format!("{owner} {purpose}"),
        tier,
        floors,
    }
}

#[component]
pub fn NetrunView() -> Element {
    let mut tier = use_signal(|| NetTier::Standard);
    let mut current = use_signal(|| None::<NetArchitecture>);

    let generate = move |_| {
        current.set(Some(generate_architecture(tier(), &mut rand::rng())));
    };

    let save = move |_| {
        let Some(arch) = current() else {
            return;
        };
        let name = arch.name.clone();
        match push_saved(&BrowserStorage, KEY_SAVED_ARCHITECTURES, arch) {
            Ok(count) => notify(
                format!("{name} saved ({count} in collection)"),
                Severity::Success,
                DEFAULT_TOAST_MS,
            ),
            Err(err) => {
                tracing::error!("architecture save failed: {err}");
                notify(
                    format!("Could not save architecture: {err}"),
                    Severity::Error,
                    DEFAULT_TOAST_MS,
                );
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%; overflow-y: auto;",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                select {
                    "aria-label": "Architecture tier",
                    style: "padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    onchange: move |e| {
                        let next = match e.value().as_str() {
                            "basic" => NetTier::Basic,
                            "uncommon" => NetTier::Uncommon,
                            "advanced" => NetTier::Advanced,
                            _ => NetTier::Standard,
                        };
                        tier.set(next);
                    },
                    for t in NetTier::ALL {
                        option {
                            value: "{t.label().to_lowercase()}",
                            selected: tier() == t,
                            "{t.label()}"
                        }
                    }
                }
                button {
                    style: "padding: 0.4rem 1rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                    onclick: generate,
                    "Generate"
                }
                if current.read().is_some() {
                    button {
                        style: "padding: 0.4rem 1rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer;",
                        onclick: save,
                        "Save"
                    }
                }
            }

            if let Some(arch) = current() {
                div {
                    style: "font-weight: 700; color: var(--text-primary, #f8fafc);",
                    "{arch.name}"
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.25rem;",
                    for floor in arch.floors.iter() {
                        div {
                            key: "{floor.depth}",
                            style: "display: flex; justify-content: space-between; gap: 0.5rem; padding: 0.35rem 0.5rem; border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); font-size: 0.85rem;",
                            span { style: "color: var(--text-muted, #64748b);", "Floor {floor.depth}" }
                            span { style: "flex: 1; color: var(--text-primary, #f8fafc);", "{floor.content}" }
                            span { style: "color: var(--warning-bg, #f59e0b); white-space: nowrap;", "DV {floor.dv}" }
                        }
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

    #[test]
    fn floor_count_stays_in_range_with_sequential_depths() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let arch = generate_architecture(NetTier::Standard, &mut rng);
            assert!((MIN_FLOORS..=MAX_FLOORS).contains(&arch.floors.len()));
            for (i, floor) in arch.floors.iter().enumerate() {
                assert_eq!(floor.depth, i as u32 + 1);
            }
        }
    }

    #[test]
    fn dvs_never_decrease_with_depth() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(22);
        for tier in NetTier::ALL {
            for _ in 0..50 {
                let arch = generate_architecture(tier, &mut rng);
                let dvs: Vec<u32> = arch.floors.iter().map(|f| f.dv).collect();
                assert!(dvs.windows(2).all(|w| w[0] <= w[1]), "{dvs:?}");
                assert!(dvs[0] >= base_dv(tier));
            }
        }
    }

    #[test]
    fn first_two_floors_are_lobby_then_tier_content() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let arch = generate_architecture(NetTier::Advanced, &mut rng);
            for floor in &arch.floors {
                if floor.depth <= 2 {
                    assert!(LOBBY_FLOORS.contains(&floor.content.as_str()));
                } else {
                    assert!(ice_pool(NetTier::Advanced).contains(&floor.content.as_str()));
                }
            }
        }
    }
}
