//! Character sheet panel. Each panel instance persists under its own
//! storage key, so two open sheets never clobber each other.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use screen_types::{CharacterSheet, Severity};

use crate::error::ScreenError;
use crate::interop::download_text;
use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{load_json, save_json, sheet_key, BrowserStorage};

pub fn sheet_to_json(sheet: &CharacterSheet) -> Result<String, ScreenError> {
    Ok(serde_json::to_string_pretty(sheet)?)
}

pub fn sheet_from_json(raw: &str) -> Result<CharacterSheet, ScreenError> {
    Ok(serde_json::from_str(raw)?)
}

fn load_sheet(panel_id: &str) -> CharacterSheet {
    match load_json::<CharacterSheet>(&BrowserStorage, &sheet_key(panel_id)) {
        Ok(Some(sheet)) => sheet,
        Ok(None) => CharacterSheet::new(),
        Err(err) => {
            tracing::error!("sheet load failed: {err}");
            notify(
                format!("Could not load character sheet: {err}"),
                Severity::Error,
                DEFAULT_TOAST_MS,
            );
            CharacterSheet::new()
        }
    }
}

fn persist_sheet(panel_id: &str, sheet: &CharacterSheet) {
    if let Err(err) = save_json(&BrowserStorage, &sheet_key(panel_id), sheet) {
        tracing::error!("sheet save failed: {err}");
        notify(
            format!("Could not save character sheet: {err}"),
            Severity::Error,
            DEFAULT_TOAST_MS,
        );
    }
}

const STAT_FIELDS: [&str; 10] = [
    "INT", "REF", "DEX", "TECH", "COOL", "WILL", "LUCK", "MOVE", "BODY", "EMP",
];

fn stat_value(sheet: &CharacterSheet, field: &str) -> i32 {
    match field {
        "INT" => sheet.stats.intelligence,
        "REF" => sheet.stats.reflexes,
        "DEX" => sheet.stats.dexterity,
        "TECH" => sheet.stats.technique,
        "COOL" => sheet.stats.cool,
        "WILL" => sheet.stats.willpower,
        "LUCK" => sheet.stats.luck,
        "MOVE" => sheet.stats.movement,
        "BODY" => sheet.stats.body,
        _ => sheet.stats.empathy,
    }
}

fn set_stat(sheet: &mut CharacterSheet, field: &str, value: i32) {
    let slot = match field {
        "INT" => &mut sheet.stats.intelligence,
        "REF" => &mut sheet.stats.reflexes,
        "DEX" => &mut sheet.stats.dexterity,
        "TECH" => &mut sheet.stats.technique,
        "COOL" => &mut sheet.stats.cool,
        "WILL" => &mut sheet.stats.willpower,
        "LUCK" => &mut sheet.stats.luck,
        "MOVE" => &mut sheet.stats.movement,
        "BODY" => &mut sheet.stats.body,
        _ => &mut sheet.stats.empathy,
    };
    *slot = value.clamp(1, 10);
}

const INPUT_STYLE: &str = "padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);";

#[component]
pub fn SheetView(panel_id: String) -> Element {
    let key_id = use_signal(|| panel_id.clone());
    let mut sheet = use_signal(move || load_sheet(&panel_id));
    let mut import_open = use_signal(|| false);
    let mut import_text = use_signal(String::new);

    let mut apply = move |f: Box<dyn FnOnce(&mut CharacterSheet)>| {
        sheet.with_mut(|s| f(s));
        persist_sheet(&key_id.read(), &sheet.read());
    };

    let export_sheet = move |_| match sheet_to_json(&sheet.read()) {
        Ok(json) => {
            let handle = sheet.read().handle.clone();
            let stem = if handle.trim().is_empty() { "character".to_string() } else { handle };
            if !download_text(&format!("{stem}.json"), "application/json", &json) {
                notify("Export failed", Severity::Error, DEFAULT_TOAST_MS);
            }
        }
        Err(err) => {
            notify(format!("Export failed: {err}"), Severity::Error, DEFAULT_TOAST_MS);
        }
    };

    let run_import = move |_| match sheet_from_json(&import_text()) {
        Ok(imported) => {
            sheet.set(imported);
            persist_sheet(&key_id.read(), &sheet.read());
            import_open.set(false);
            import_text.set(String::new());
            notify("Character imported", Severity::Success, DEFAULT_TOAST_MS);
        }
        Err(err) => {
            tracing::warn!("sheet import rejected: {err}");
            notify(format!("Import failed: {err}"), Severity::Error, DEFAULT_TOAST_MS);
        }
    };

    let current = sheet.read().clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; height: 100%; overflow-y: auto;",

            div {
                style: "display: flex; gap: 0.5rem;",
                input {
                    value: "{current.handle}",
                    placeholder: "Handle",
                    "aria-label": "Character handle",
                    style: "flex: 1; min-width: 0; {INPUT_STYLE} font-weight: 600;",
                    oninput: move |e| {
                        let v = e.value();
                        apply(Box::new(move |s| s.handle = v));
                    },
                }
                input {
                    value: "{current.role}",
                    placeholder: "Role",
                    "aria-label": "Character role",
                    style: "width: 8rem; {INPUT_STYLE}",
                    oninput: move |e| {
                        let v = e.value();
                        apply(Box::new(move |s| s.role = v));
                    },
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.4rem;",
                for field in STAT_FIELDS {
                    label {
                        style: "display: flex; flex-direction: column; gap: 0.15rem; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                        "{field}"
                        input {
                            r#type: "number",
                            min: "1",
                            max: "10",
                            value: "{stat_value(&current, field)}",
                            style: "{INPUT_STYLE} width: 100%;",
                            oninput: move |e| {
                                if let Ok(v) = e.value().parse::<i32>() {
                                    apply(Box::new(move |s| set_stat(s, field, v)));
                                }
                            },
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.4rem;",
                label {
                    style: "display: flex; flex-direction: column; gap: 0.15rem; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                    "HP"
                    input {
                        r#type: "number",
                        value: "{current.hit_points}",
                        style: "{INPUT_STYLE}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                apply(Box::new(move |s| s.hit_points = v.max(0)));
                            }
                        },
                    }
                }
                label {
                    style: "display: flex; flex-direction: column; gap: 0.15rem; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                    "Humanity"
                    input {
                        r#type: "number",
                        value: "{current.humanity}",
                        style: "{INPUT_STYLE}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                apply(Box::new(move |s| s.humanity = v.max(0)));
                            }
                        },
                    }
                }
                label {
                    style: "display: flex; flex-direction: column; gap: 0.15rem; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                    "Armor"
                    input {
                        r#type: "number",
                        value: "{current.armor}",
                        style: "{INPUT_STYLE}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                apply(Box::new(move |s| s.armor = v.max(0)));
                            }
                        },
                    }
                }
            }

            textarea {
                value: "{current.notes}",
                placeholder: "Gear, contacts, conditions…",
                "aria-label": "Character notes",
                rows: "4",
                style: "{INPUT_STYLE} width: 100%; resize: vertical; font-size: 0.85rem;",
                oninput: move |e| {
                    let v = e.value();
                    apply(Box::new(move |s| s.notes = v));
                },
            }

            div {
                style: "display: flex; gap: 0.5rem;",
                button {
                    style: "padding: 0.35rem 0.8rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onclick: export_sheet,
                    "Export JSON"
                }
                button {
                    style: "padding: 0.35rem 0.8rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onclick: move |_| import_open.set(!import_open()),
                    "Import JSON"
                }
            }

            if import_open() {
                textarea {
                    placeholder: "Paste character JSON here",
                    rows: "5",
                    value: "{import_text}",
                    style: "{INPUT_STYLE} width: 100%; font-family: monospace; font-size: 0.8rem; resize: vertical;",
                    oninput: move |e| import_text.set(e.value()),
                }
                button {
                    style: "align-self: flex-start; padding: 0.35rem 0.8rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onclick: run_import,
                    "Import character"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_export_import_round_trips_identical_values() {
        let mut sheet = CharacterSheet::new();
        sheet.handle = "Rogue".to_string();
        sheet.role = "Solo".to_string();
        sheet.stats.reflexes = 8;
        sheet.hit_points = 35;
        sheet.notes = "owes a favor to Viktor".to_string();

        let json = sheet_to_json(&sheet).unwrap();
        let back = sheet_from_json(&json).unwrap();
        assert_eq!(sheet, back);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(sheet_from_json("{\"handle\": ").is_err());
        assert!(sheet_from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn stats_clamp_to_one_through_ten() {
        let mut sheet = CharacterSheet::new();
        set_stat(&mut sheet, "REF", 99);
        assert_eq!(sheet.stats.reflexes, 10);
        set_stat(&mut sheet, "BODY", -3);
        assert_eq!(sheet.stats.body, 1);
    }

    #[test]
    fn every_stat_field_is_reachable() {
        let mut sheet = CharacterSheet::new();
        for (i, field) in STAT_FIELDS.iter().enumerate() {
            set_stat(&mut sheet, field, (i % 10 + 1) as i32);
            assert_eq!(stat_value(&sheet, field), (i % 10 + 1) as i32);
        }
    }
}
