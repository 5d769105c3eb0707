//! Quick rules reference panel. Static content only.

use dioxus::prelude::*;

struct RuleSection {
    title: &'static str,
    body: &'static [&'static str],
}

const SECTIONS: &[RuleSection] = &[
    RuleSection {
        title: "Skill checks",
        body: &[
            "Roll d10 + STAT + skill vs a difficulty value (DV).",
            "DV 9 everyday, 13 difficult, 15 professional, 17 heroic, 21 incredible.",
            "Natural 10 explodes: roll again and add. Natural 1 implodes: roll again and subtract.",
        ],
    },
    RuleSection {
        title: "Combat turn",
        body: &[
            "Initiative: d10 + REF, highest first.",
            "On your turn: one move action plus one other action.",
            "Ranged attacks: d10 + REF + weapon skill vs range DV.",
            "Melee: opposed or vs DV by weapon; brawling uses DEX.",
        ],
    },
    RuleSection {
        title: "Damage and armor",
        body: &[
            "Subtract the armor SP of the hit location from damage; the rest comes off HP.",
            "Any single hit of 8+ through armor ablates that armor by 1 SP.",
            "At half HP you are Seriously Wounded: -2 to all checks.",
            "At 0 HP or less, make a death save (roll WILL or less on d10) each turn.",
        ],
    },
    RuleSection {
        title: "Netrunning in the field",
        body: &[
            "A netrunner needs physical proximity to the architecture's access point.",
            "Each NET action is one meat-world action; interface ranks per turn.",
            "ICE attacks the runner directly; derezz means dumped, maybe worse.",
        ],
    },
    RuleSection {
        title: "Humanity",
        body: &[
            "Installing cyberware costs humanity; therapy can restore some.",
            "At Humanity 0 the character is gone: cyberpsychosis, MaxTac responds.",
            "EMP stat is current Humanity / 10, rounded down.",
        ],
    },
];

#[component]
pub fn RulesView() -> Element {
    let mut open_section = use_signal(|| 0usize);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.4rem; padding: 0.75rem; height: 100%; overflow-y: auto;",

            for (i, section) in SECTIONS.iter().enumerate() {
                div {
                    key: "{section.title}",
                    button {
                        style: if open_section() == i {
                            "width: 100%; text-align: left; padding: 0.45rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, #f8fafc); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-weight: 600;"
                        } else {
                            "width: 100%; text-align: left; padding: 0.45rem 0.6rem; background: transparent; color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-weight: 600;"
                        },
                        "aria-expanded": if open_section() == i { "true" } else { "false" },
                        onclick: move |_| open_section.set(i),
                        "{section.title}"
                    }
                    if open_section() == i {
                        ul {
                            style: "margin: 0.25rem 0 0.5rem; padding-left: 1.25rem; display: flex; flex-direction: column; gap: 0.3rem;",
                            for line in section.body {
                                li {
                                    style: "color: var(--text-secondary, #94a3b8); font-size: 0.85rem; line-height: 1.4;",
                                    "{line}"
                                }
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

    #[test]
    fn sections_are_titled_and_non_empty() {
        assert!(!SECTIONS.is_empty());
        for section in SECTIONS {
            assert!(!section.title.is_empty());
            assert!(!section.body.is_empty());
        }
    }
}
