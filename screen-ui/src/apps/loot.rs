//! Loot generator panel: tiered hauls with weighted rarities.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use rand::prelude::IndexedRandom;
use rand::Rng;
use screen_types::{LootHaul, LootItem, Rarity, Severity, ValueTier};

use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{push_saved, BrowserStorage, KEY_SAVED_LOOT};

const MAX_ITEMS: usize = 4;

const COMMON_ITEMS: &[&str] = &[
    "scratched agent", "budget medkit", "knockoff shades", "ammo box (mixed)",
    "synth-leather jacket", "burner credchip", "flickering holo-lighter",
];
const UNCOMMON_ITEMS: &[&str] = &[
    "mil-spec flashlight", "clean ripperdoc voucher", "encrypted datashard",
    "armored vest, lightly used", "smart-lock pistol case", "corp cafeteria keycard",
];
const RARE_ITEMS: &[&str] = &[
    "prototype optic suite", "sealed pharma case", "exec's personal agent",
    "decker's modded cyberdeck", "untraceable credchip",
];
const LEGENDARY_ITEMS: &[&str] = &[
    "pre-collapse data archive", "signed rockerboy guitar", "AV keys with clean title",
    "full borg conversion voucher",
];

pub(crate) fn rarity_pool(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => COMMON_ITEMS,
        Rarity::Uncommon => UNCOMMON_ITEMS,
        Rarity::Rare => RARE_ITEMS,
        Rarity::Legendary => LEGENDARY_ITEMS,
    }
}

/// Value range per rarity, in eurobucks.
pub(crate) fn value_range(rarity: Rarity) -> (i32, i32) {
    match rarity {
        Rarity::Common => (10, 100),
        Rarity::Uncommon => (100, 500),
        Rarity::Rare => (500, 3_000),
        Rarity::Legendary => (3_000, 15_000),
    }
}

pub(crate) const RARITIES: [Rarity; 4] = [
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Legendary,
];

pub(crate) fn pick_rarity(tier: ValueTier, budget: i32, rng: &mut impl Rng) -> Option<Rarity> {
    let weights = tier.rarity_weights();
    let candidates: Vec<(Rarity, u32)> = RARITIES
        .iter()
        .zip(weights)
        .filter(|&(&rarity, weight)| weight > 0 && value_range(rarity).0 <= budget)
        .map(|(&rarity, weight)| (rarity, weight))
        .collect();
    let total: u32 = candidates.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }
    let mut pick = rng.random_range(0..total);
    for (rarity, weight) in candidates {
        if pick < weight {
            return Some(rarity);
        }
        pick -= weight;
    }
    None
}

/// Generate a haul whose total value never exceeds the tier cap and whose
/// rarities respect the tier weights (zero weight never appears).
pub fn generate_haul(tier: ValueTier, rng: &mut impl Rng) -> LootHaul {
    let cap = tier.value_cap();
    let item_count = rng.random_range(1..=MAX_ITEMS);
    let mut items = Vec::with_capacity(item_count);
    let mut total = 0;

    for _ in 0..item_count {
        let budget = cap - total;
        let Some(rarity) = pick_rarity(tier, budget, rng) else {
            break;
        };
        let (min, max) = value_range(rarity);
        let value = rng.random_range(min..=max.min(budget));
        let name = rarity_pool(rarity).choose(rng).copied().unwrap_or("scrap");
        items.push(LootItem {
            name: name.to_string(),
            rarity,
            value,
        });
        total += value;
    }

    LootHaul {
        tier,
        items,
        total_value: total,
    }
}

fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "var(--text-secondary, #94a3b8)",
        Rarity::Uncommon => "var(--success-bg, #10b981)",
        Rarity::Rare => "var(--accent-bg, #3b82f6)",
        Rarity::Legendary => "var(--warning-bg, #f59e0b)",
    }
}

#[component]
pub fn LootView() -> Element {
    let mut tier = use_signal(|| ValueTier::Standard);
    let mut current = use_signal(|| None::<LootHaul>);

    let generate = move |_| {
        current.set(Some(generate_haul(tier(), &mut rand::rng())));
    };

    let save = move |_| {
        let Some(haul) = current() else {
            return;
        };
        match push_saved(&BrowserStorage, KEY_SAVED_LOOT, haul) {
            Ok(count) => notify(
                format!("Haul saved ({count} in collection)"),
                Severity::Success,
                DEFAULT_TOAST_MS,
            ),
            Err(err) => {
                tracing::error!("loot save failed: {err}");
                notify(format!("Could not save haul: {err}"), Severity::Error, DEFAULT_TOAST_MS);
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%;",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                select {
                    "aria-label": "Value tier",
                    style: "padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    onchange: move |e| {
                        let next = match e.value().as_str() {
                            "poor" => ValueTier::Poor,
                            "wealthy" => ValueTier::Wealthy,
                            "lavish" => ValueTier::Lavish,
                            _ => ValueTier::Standard,
                        };
                        tier.set(next);
                    },
                    for t in ValueTier::ALL {
                        option {
                            value: "{t.label().to_lowercase()}",
                            selected: tier() == t,
                            "{t.label()} (≤ {t.value_cap()}eb)"
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

            if let Some(haul) = current() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.4rem;",
                    for (i, item) in haul.items.iter().enumerate() {
                        div {
                            key: "{i}",
                            style: "display: flex; justify-content: space-between; gap: 0.5rem; font-size: 0.9rem;",
                            span { style: "color: var(--text-primary, #f8fafc);", "{item.name}" }
                            span {
                                style: "color: {rarity_color(item.rarity)}; white-space: nowrap;",
                                "{item.rarity.label()} · {item.value}eb"
                            }
                        }
                    }
                    div {
                        style: "margin-top: 0.25rem; padding-top: 0.4rem; border-top: 1px solid var(--border-color, #334155); font-weight: 700; color: var(--text-primary, #f8fafc); text-align: right;",
                        "Total: {haul.total_value}eb"
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
    fn poor_hauls_stay_under_cap_with_no_high_rarities() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let haul = generate_haul(ValueTier::Poor, &mut rng);
            assert!(haul.total_value <= 500, "over cap: {haul:?}");
            assert!(!haul.items.is_empty());
            assert!(haul
                .items
                .iter()
                .all(|i| matches!(i.rarity, Rarity::Common | Rarity::Uncommon)));
        }
    }

    #[test]
    fn every_tier_respects_its_cap() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12);
        for tier in ValueTier::ALL {
            for _ in 0..100 {
                let haul = generate_haul(tier, &mut rng);
                assert!(haul.total_value <= tier.value_cap());
                let sum: i32 = haul.items.iter().map(|i| i.value).sum();
                assert_eq!(sum, haul.total_value);
            }
        }
    }

    #[test]
    fn zero_weight_rarities_never_appear() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let haul = generate_haul(ValueTier::Standard, &mut rng);
            assert!(haul.items.iter().all(|i| i.rarity != Rarity::Legendary));
        }
    }
}
