//! Night market panel: loot tables re-priced as a storefront.

use dioxus::prelude::*;
use rand::prelude::IndexedRandom;
use rand::Rng;
use screen_types::{LootItem, Rarity, ValueTier};

use crate::apps::loot::{pick_rarity, rarity_pool, value_range};

const MIN_STOCK: usize = 4;
const MAX_STOCK: usize = 8;
/// Street markup over base value, in percent.
const MARKUP_RANGE: (i32, i32) = (120, 200);

#[derive(Debug, Clone, PartialEq)]
pub struct ShopListing {
    pub item: LootItem,
    pub price: i32,
}

const VENDORS: &[&str] = &[
    "Kabuki stall", "night market table", "vending shrine", "back-alley van",
    "licensed kiosk", "pawn cage",
];

/// Price a base value with street markup, rounded up to the next 5eb.
pub fn street_price(value: i32, rng: &mut impl Rng) -> i32 {
    let markup = rng.random_range(MARKUP_RANGE.0..=MARKUP_RANGE.1);
    let raw = (value as i64 * markup as i64 / 100) as i32;
    (raw + 4) / 5 * 5
}

/// Stock a storefront. Rarity availability follows the tier weights, but
/// unlike a haul there is no total cap: shops ask, they don't give.
pub fn generate_inventory(tier: ValueTier, rng: &mut impl Rng) -> Vec<ShopListing> {
    let stock = rng.random_range(MIN_STOCK..=MAX_STOCK);
    let mut listings = Vec::with_capacity(stock);
    for _ in 0..stock {
        let Some(rarity) = pick_rarity(tier, i32::MAX, rng) else {
            break;
        };
        let (min, max) = value_range(rarity);
        let value = rng.random_range(min..=max);
        let name = rarity_pool(rarity).choose(rng).copied().unwrap_or("scrap");
        listings.push(ShopListing {
            item: LootItem {
                name: name.to_string(),
                rarity,
                value,
            },
            price: street_price(value, rng),
        });
    }
    listings.sort_by_key(|l| l.price);
    listings
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
pub fn ShopView() -> Element {
    let mut tier = use_signal(|| ValueTier::Standard);
    let mut vendor = use_signal(|| VENDORS[0]);
    let mut inventory = use_signal(Vec::<ShopListing>::new);

    let restock = move |_| {
        let mut rng = rand::rng();
        vendor.set(VENDORS.choose(&mut rng).copied().unwrap_or(VENDORS[0]));
        inventory.set(generate_inventory(tier(), &mut rng));
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%; overflow-y: auto;",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                select {
                    "aria-label": "Shop quality",
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
                            "{t.label()}"
                        }
                    }
                }
                button {
                    style: "padding: 0.4rem 1rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                    onclick: restock,
                    "Restock"
                }
            }

            if !inventory.read().is_empty() {
                div {
                    style: "font-size: 0.85rem; color: var(--text-muted, #64748b);",
                    "A {vendor} in the neon glow. No refunds."
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.35rem;",
                    for (i, listing) in inventory.read().iter().enumerate() {
                        div {
                            key: "{i}",
                            style: "display: flex; justify-content: space-between; gap: 0.5rem; padding: 0.35rem 0.5rem; border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); font-size: 0.85rem;",
                            span { style: "color: var(--text-primary, #f8fafc);", "{listing.item.name}" }
                            span {
                                style: "color: {rarity_color(listing.item.rarity)}; white-space: nowrap;",
                                "{listing.item.rarity.label()} · {listing.price}eb"
                            }
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
    fn stock_size_and_sorting() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(51);
        for _ in 0..50 {
            let inventory = generate_inventory(ValueTier::Wealthy, &mut rng);
            assert!((MIN_STOCK..=MAX_STOCK).contains(&inventory.len()));
            let prices: Vec<i32> = inventory.iter().map(|l| l.price).collect();
            assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn prices_never_undercut_base_value() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(52);
        for _ in 0..200 {
            let price = street_price(100, &mut rng);
            assert!(price >= 120);
            assert_eq!(price % 5, 0);
        }
    }

    #[test]
    fn poor_shops_stock_no_high_rarities() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(53);
        for _ in 0..100 {
            let inventory = generate_inventory(ValueTier::Poor, &mut rng);
            assert!(inventory
                .iter()
                .all(|l| matches!(l.item.rarity, Rarity::Common | Rarity::Uncommon)));
        }
    }
}
