//! Initiative tracker panel.

use dioxus::prelude::*;
use rand::Rng;
use screen_types::Combatant;

pub fn roll_initiative(modifier: i32, rng: &mut impl Rng) -> i32 {
    rng.random_range(1..=10) + modifier
}

/// Highest first; ties break by name so the order is stable across renders.
pub fn sort_order(combatants: &mut [Combatant]) {
    combatants.sort_by(|a, b| b.initiative.cmp(&a.initiative).then(a.name.cmp(&b.name)));
}

#[component]
pub fn InitiativeView() -> Element {
    let mut combatants = use_signal(Vec::<Combatant>::new);
    let mut name = use_signal(String::new);
    let mut modifier = use_signal(|| 0i32);
    let mut turn = use_signal(|| 0usize);

    let add = use_callback(move |_: ()| {
        let trimmed = name().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        let initiative = roll_initiative(modifier(), &mut rand::rng());
        combatants.with_mut(|list| {
            list.push(Combatant {
                name: trimmed,
                initiative,
            });
            sort_order(list);
        });
        name.set(String::new());
        turn.set(0);
    });

    let next_turn = move |_| {
        let len = combatants.read().len();
        if len > 0 {
            turn.set((turn() + 1) % len);
        }
    };

    let clear = move |_| {
        combatants.set(Vec::new());
        turn.set(0);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.6rem; padding: 1rem; height: 100%;",

            div {
                style: "display: flex; gap: 0.4rem;",
                input {
                    value: "{name}",
                    placeholder: "Combatant",
                    "aria-label": "Combatant name",
                    style: "flex: 1; min-width: 0; padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    oninput: move |e| name.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            add.call(());
                        }
                    },
                }
                input {
                    r#type: "number",
                    value: "{modifier}",
                    "aria-label": "Initiative modifier",
                    style: "width: 3.5rem; padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<i32>() {
                            modifier.set(v);
                        }
                    },
                }
                button {
                    style: "padding: 0.35rem 0.8rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onclick: move |_| add.call(()),
                    "Roll in"
                }
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 0.25rem; overflow-y: auto;",
                for (i, c) in combatants.read().iter().enumerate() {
                    div {
                        key: "{c.name}-{i}",
                        style: if i == turn() {
                            "display: flex; justify-content: space-between; gap: 0.5rem; padding: 0.35rem 0.5rem; border-radius: var(--radius-sm, 4px); background: var(--hover-bg, rgba(255,255,255,0.1)); border-left: 3px solid var(--accent-bg, #3b82f6);"
                        } else {
                            "display: flex; justify-content: space-between; gap: 0.5rem; padding: 0.35rem 0.5rem; border-radius: var(--radius-sm, 4px); border-left: 3px solid transparent;"
                        },
                        span { style: "color: var(--text-primary, #f8fafc);", "{c.name}" }
                        span {
                            style: "color: var(--text-secondary, #94a3b8); font-family: monospace;",
                            "{c.initiative}"
                        }
                    }
                }
            }

            if !combatants.read().is_empty() {
                div {
                    style: "display: flex; gap: 0.4rem;",
                    button {
                        style: "flex: 1; padding: 0.35rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                        onclick: next_turn,
                        "Next turn"
                    }
                    button {
                        style: "padding: 0.35rem 0.8rem; background: transparent; color: var(--danger-bg, #ef4444); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer;",
                        onclick: clear,
                        "Clear"
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
    fn initiative_is_d10_plus_modifier() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(31);
        for _ in 0..100 {
            let rolled = roll_initiative(5, &mut rng);
            assert!((6..=15).contains(&rolled));
        }
    }

    #[test]
    fn order_is_descending_with_stable_ties() {
        let mut list = vec![
            Combatant { name: "Zed".into(), initiative: 12 },
            Combatant { name: "Ana".into(), initiative: 17 },
            Combatant { name: "Bo".into(), initiative: 12 },
        ];
        sort_order(&mut list);
        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bo", "Zed"]);
    }
}
