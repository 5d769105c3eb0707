//! Notes panel: document list, editor with debounced autosave, and
//! import/export in HTML, plain text, and Markdown.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;
use screen_types::{NoteDocument, Severity};

use crate::interop::download_text;
use crate::notify::{notify, DEFAULT_TOAST_MS};
use crate::storage::{load_json, save_json, BrowserStorage, KEY_NOTES};

pub mod logic;

use logic::{export_filename, export_note, import_note, ExportFormat};

const AUTOSAVE_DEBOUNCE_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq)]
enum SaveState {
    Clean,
    Dirty,
    Saved,
    Error(String),
}

impl SaveState {
    fn label(&self) -> String {
        match self {
            SaveState::Clean => String::new(),
            SaveState::Dirty => "Unsaved changes".to_string(),
            SaveState::Saved => "Saved".to_string(),
            SaveState::Error(message) => format!("Save failed: {message}"),
        }
    }
}

fn load_documents() -> Vec<NoteDocument> {
    match load_json::<Vec<NoteDocument>>(&BrowserStorage, KEY_NOTES) {
        Ok(Some(documents)) => documents,
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::error!("notes load failed: {err}");
            notify(
                format!("Could not load notes: {err}"),
                Severity::Error,
                DEFAULT_TOAST_MS,
            );
            Vec::new()
        }
    }
}

fn persist_documents(documents: &[NoteDocument]) -> SaveState {
    match save_json(&BrowserStorage, KEY_NOTES, &documents.to_vec()) {
        Ok(()) => SaveState::Saved,
        Err(err) => {
            tracing::error!("notes save failed: {err}");
            notify(
                format!("Could not save notes: {err}"),
                Severity::Error,
                DEFAULT_TOAST_MS,
            );
            SaveState::Error(err.to_string())
        }
    }
}

#[component]
pub fn NotesView() -> Element {
    let mut documents = use_signal(load_documents);
    let mut selected = use_signal(|| None::<String>);
    let mut save_state = use_signal(|| SaveState::Clean);
    let mut autosave_epoch = use_signal(|| 0u64);
    let mut import_open = use_signal(|| false);
    let mut import_format = use_signal(|| ExportFormat::Html);
    let mut import_text = use_signal(String::new);

    // Debounce: every edit bumps the epoch; only the task holding the
    // latest epoch actually writes.
    let schedule_autosave = use_callback(move |_: ()| {
        save_state.set(SaveState::Dirty);
        let epoch = autosave_epoch() + 1;
        autosave_epoch.set(epoch);
        spawn(async move {
            TimeoutFuture::new(AUTOSAVE_DEBOUNCE_MS).await;
            if autosave_epoch() != epoch {
                return;
            }
            let state = persist_documents(&documents.read());
            save_state.set(state);
        });
    });

    let edit_selected = use_callback(move |edit: Box<dyn FnOnce(&mut NoteDocument)>| {
        let Some(id) = selected() else {
            return;
        };
        documents.with_mut(|docs| {
            if let Some(doc) = docs.iter_mut().find(|d| d.id == id) {
                edit(doc);
                doc.last_modified = chrono::Utc::now();
            }
        });
        schedule_autosave.call(());
    });

    let new_document = move |_| {
        let doc = NoteDocument::new("Untitled");
        let id = doc.id.clone();
        documents.with_mut(|docs| docs.push(doc));
        selected.set(Some(id));
        schedule_autosave.call(());
    };

    let delete_selected = move |_| {
        let Some(id) = selected() else {
            return;
        };
        documents.with_mut(|docs| docs.retain(|d| d.id != id));
        selected.set(None);
        schedule_autosave.call(());
    };

    let export_selected = move |format: ExportFormat| {
        let Some(id) = selected() else {
            return;
        };
        let Some(doc) = documents.read().iter().find(|d| d.id == id).cloned() else {
            return;
        };
        let body = export_note(&doc, format);
        if !download_text(&export_filename(&doc.title, format), format.mime(), &body) {
            notify("Export failed", Severity::Error, DEFAULT_TOAST_MS);
        }
    };

    let run_import = move |_| {
        match import_note(&import_text(), import_format()) {
            Ok((title, content)) => {
                let mut doc = NoteDocument::new(title);
                doc.content = content;
                let id = doc.id.clone();
                documents.with_mut(|docs| docs.push(doc));
                selected.set(Some(id));
                import_open.set(false);
                import_text.set(String::new());
                schedule_autosave.call(());
                notify("Note imported", Severity::Success, DEFAULT_TOAST_MS);
            }
            Err(err) => {
                tracing::warn!("note import rejected: {err}");
                notify(
                    format!("Import failed: {err}"),
                    Severity::Error,
                    DEFAULT_TOAST_MS,
                );
            }
        }
    };

    let selected_doc = selected().and_then(|id| {
        documents.read().iter().find(|d| d.id == id).cloned()
    });

    rsx! {
        div {
            style: "display: flex; height: 100%;",

            div {
                style: "width: 160px; border-right: 1px solid var(--border-color, #334155); display: flex; flex-direction: column; overflow-y: auto;",
                div {
                    style: "display: flex; gap: 0.25rem; padding: 0.5rem;",
                    button {
                        style: "flex: 1; padding: 0.3rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8rem;",
                        onclick: new_document,
                        "New"
                    }
                    button {
                        style: "flex: 1; padding: 0.3rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8rem;",
                        onclick: move |_| import_open.set(!import_open()),
                        "Import"
                    }
                }
                for doc in documents.read().iter() {
                    button {
                        key: "{doc.id}",
                        style: if selected().as_deref() == Some(doc.id.as_str()) {
                            "text-align: left; padding: 0.4rem 0.5rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, #f8fafc); border: none; cursor: pointer; font-size: 0.85rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;"
                        } else {
                            "text-align: left; padding: 0.4rem 0.5rem; background: transparent; color: var(--text-secondary, #94a3b8); border: none; cursor: pointer; font-size: 0.85rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;"
                        },
                        onclick: {
                            let id = doc.id.clone();
                            move |_| selected.set(Some(id.clone()))
                        },
                        "{doc.title}"
                    }
                }
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                if import_open() {
                    div {
                        style: "display: flex; flex-direction: column; gap: 0.5rem; padding: 0.75rem; border-bottom: 1px solid var(--border-color, #334155);",
                        select {
                            "aria-label": "Import format",
                            style: "align-self: flex-start; padding: 0.3rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px);",
                            onchange: move |e| {
                                let format = match e.value().as_str() {
                                    "txt" => ExportFormat::PlainText,
                                    "md" => ExportFormat::Markdown,
                                    _ => ExportFormat::Html,
                                };
                                import_format.set(format);
                            },
                            for format in ExportFormat::ALL {
                                option {
                                    value: "{format.extension()}",
                                    selected: import_format() == format,
                                    "{format.label()}"
                                }
                            }
                        }
                        textarea {
                            placeholder: "Paste exported document here",
                            rows: "6",
                            value: "{import_text}",
                            style: "width: 100%; padding: 0.5rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); font-family: monospace; font-size: 0.8rem; resize: vertical;",
                            oninput: move |e| import_text.set(e.value()),
                        }
                        button {
                            style: "align-self: flex-start; padding: 0.35rem 0.8rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                            onclick: run_import,
                            "Import document"
                        }
                    }
                }

                if let Some(doc) = selected_doc {
                    div {
                        style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--border-color, #334155);",
                        input {
                            value: "{doc.title}",
                            "aria-label": "Note title",
                            style: "flex: 1; min-width: 0; padding: 0.35rem; background: var(--input-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); font-weight: 600;",
                            oninput: move |e| {
                                let title = e.value();
                                edit_selected.call(Box::new(move |d| d.title = title));
                            },
                        }
                        for format in ExportFormat::ALL {
                            button {
                                style: "padding: 0.3rem 0.5rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.75rem;",
                                "aria-label": "Export as {format.label()}",
                                onclick: move |_| export_selected(format),
                                "{format.extension()}"
                            }
                        }
                        button {
                            style: "padding: 0.3rem 0.5rem; background: transparent; color: var(--danger-bg, #ef4444); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.75rem;",
                            "aria-label": "Delete note",
                            onclick: delete_selected,
                            "Delete"
                        }
                    }
                    textarea {
                        value: "{doc.content}",
                        "aria-label": "Note content",
                        style: "flex: 1; width: 100%; padding: 0.75rem; background: transparent; color: var(--text-primary, #f8fafc); border: none; outline: none; resize: none; font-size: 0.9rem; line-height: 1.5;",
                        oninput: move |e| {
                            let content = e.value();
                            edit_selected.call(Box::new(move |d| d.content = content));
                        },
                    }
                    div {
                        style: "padding: 0.25rem 0.75rem; font-size: 0.75rem; color: var(--text-muted, #64748b); min-height: 1.2rem;",
                        "{save_state.read().label()}"
                    }
                } else {
                    div {
                        style: "display: flex; align-items: center; justify-content: center; flex: 1; color: var(--text-muted, #64748b);",
                        "Select or create a note"
                    }
                }
            }
        }
    }
}
