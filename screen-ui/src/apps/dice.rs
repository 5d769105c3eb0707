//! Dice roller panel.

use dioxus::prelude::*;
use rand::Rng;

const HISTORY_CAP: usize = 5;
const MAX_DICE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
    pub modifier: i32,
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self {
            count: 1,
            sides: 10,
            modifier: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiceRoll {
    pub spec: DiceSpec,
    pub faces: Vec<u32>,
    pub total: i32,
}

impl DiceRoll {
    pub fn summary(&self) -> String {
        let faces: Vec<String> = self.faces.iter().map(|f| f.to_string()).collect();
        let modifier = match self.spec.modifier {
            0 => String::new(),
            m if m > 0 => format!(" + {m}"),
            m => format!(" - {}", -m),
        };
        format!(
            "{}d{}{}: [{}] = {}",
            self.spec.count,
            self.spec.sides,
            modifier,
            faces.join(", "),
            self.total
        )
    }
}

/// Roll with out-of-range counts and sides clamped to something sane.
pub fn roll(spec: DiceSpec, rng: &mut impl Rng) -> DiceRoll {
    let spec = DiceSpec {
        count: spec.count.clamp(1, MAX_DICE),
        sides: spec.sides.max(2),
        modifier: spec.modifier,
    };
    let faces: Vec<u32> = (0..spec.count)
        .map(|_| rng.random_range(1..=spec.sides))
        .collect();
    let total = faces.iter().map(|&f| f as i64).sum::<i64>() as i32 + spec.modifier;
    DiceRoll { spec, faces, total }
}

/// Newest first, capped at [`HISTORY_CAP`].
pub fn push_history(history: &mut Vec<DiceRoll>, roll: DiceRoll) {
    history.insert(0, roll);
    history.truncate(HISTORY_CAP);
}

#[component]
pub fn DiceView() -> Element {
    let mut count = use_signal(|| 3u32);
    let mut sides = use_signal(|| 6u32);
    let mut modifier = use_signal(|| 0i32);
    let mut history = use_signal(Vec::<DiceRoll>::new);

    let roll_dice = move |_| {
        let spec = DiceSpec {
            count: count(),
            sides: sides(),
            modifier: modifier(),
        };
        let result = roll(spec, &mut rand::rng());
        history.with_mut(|h| push_history(h, result));
    };

    let latest = history.read().first().cloned();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%;",

            div {
                style: "display: flex; align-items: center; gap: 0.5rem; flex-wrap: wrap;",
                input {
                    r#type: "number",
                    min: "1",
                    max: "{MAX_DICE}",
                    value: "{count}",
                    "aria-label": "Number of dice",
                    style: "width: 4rem; padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            count.set(v.clamp(1, MAX_DICE));
                        }
                    },
                }
                span { style: "color: var(--text-secondary, #94a3b8);", "d" }
                select {
                    "aria-label": "Die sides",
                    style: "padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    onchange: move |e| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            sides.set(v);
                        }
                    },
                    for s in [4u32, 6, 8, 10, 12, 20, 100] {
                        option { value: "{s}", selected: sides() == s, "d{s}" }
                    }
                }
                span { style: "color: var(--text-secondary, #94a3b8);", "+" }
                input {
                    r#type: "number",
                    value: "{modifier}",
                    "aria-label": "Modifier",
                    style: "width: 4rem; padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<i32>() {
                            modifier.set(v);
                        }
                    },
                }
                button {
                    style: "padding: 0.35rem 0.9rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                    onclick: roll_dice,
                    "Roll"
                }
            }

            if let Some(latest) = latest {
                div {
                    style: "font-size: 1.75rem; font-weight: 700; color: var(--text-primary, #f8fafc); text-align: center; padding: 0.5rem;",
                    "{latest.total}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 0.25rem; overflow-y: auto;",
                for (i, past) in history.read().iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "font-size: 0.85rem; color: var(--text-secondary, #94a3b8); font-family: monospace;",
                        "{past.summary()}"
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

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(7)
    }

    #[test]
    fn faces_stay_in_range_and_total_includes_modifier() {
        let mut rng = rng();
        for _ in 0..50 {
            let result = roll(
                DiceSpec {
                    count: 3,
                    sides: 6,
                    modifier: 2,
                },
                &mut rng,
            );
            assert_eq!(result.faces.len(), 3);
            assert!(result.faces.iter().all(|&f| (1..=6).contains(&f)));
            let sum: i32 = result.faces.iter().map(|&f| f as i32).sum();
            assert_eq!(result.total, sum + 2);
        }
    }

    #[test]
    fn degenerate_specs_are_clamped() {
        let mut rng = rng();
        let result = roll(
            DiceSpec {
                count: 0,
                sides: 1,
                modifier: 0,
            },
            &mut rng,
        );
        assert_eq!(result.spec.count, 1);
        assert_eq!(result.spec.sides, 2);
        assert_eq!(result.faces.len(), 1);
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let mut rng = rng();
        let mut history = Vec::new();
        for modifier in 0..8 {
            let result = roll(
                DiceSpec {
                    count: 1,
                    sides: 6,
                    modifier,
                },
                &mut rng,
            );
            push_history(&mut history, result);
        }
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0].spec.modifier, 7);
        assert_eq!(history[HISTORY_CAP - 1].spec.modifier, 3);
    }

    #[test]
    fn summary_formats_negative_modifiers() {
        let result = DiceRoll {
            spec: DiceSpec {
                count: 2,
                sides: 6,
                modifier: -1,
            },
            faces: vec![3, 5],
            total: 7,
        };
        assert_eq!(result.summary(), "2d6 - 1: [3, 5] = 7");
    }
}
