//! Transient toast notifications.
//!
//! Any component may call [`notify`]; toasts render in a fixed overlay and
//! auto-dismiss after their duration.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use screen_types::Severity;

pub const DEFAULT_TOAST_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

/// Pending toasts plus the id counter. Pure so the queue logic is
/// host-testable without a Dioxus runtime.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, severity: Severity, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            severity,
            duration_ms,
        });
        id
    }

    /// Idempotent: dismissing an unknown id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub static TOASTS: GlobalSignal<ToastQueue> = GlobalSignal::new(ToastQueue::default);

/// Global notification entry point.
pub fn notify(message: impl Into<String>, severity: Severity, duration_ms: u32) {
    let message = message.into();
    match severity {
        Severity::Error => dioxus_logger::tracing::error!("{}", message),
        Severity::Warning => dioxus_logger::tracing::warn!("{}", message),
        _ => dioxus_logger::tracing::info!("{}", message),
    }

    let id = TOASTS.write().push(message, severity, duration_ms);
    spawn(async move {
        TimeoutFuture::new(duration_ms).await;
        TOASTS.write().dismiss(id);
    });
}

fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "border-left: 4px solid var(--accent-bg, #3b82f6);",
        Severity::Success => "border-left: 4px solid var(--success-bg, #10b981);",
        Severity::Warning => "border-left: 4px solid var(--warning-bg, #f59e0b);",
        Severity::Error => "border-left: 4px solid var(--danger-bg, #ef4444);",
    }
}

#[component]
pub fn ToastLayer() -> Element {
    let toasts = TOASTS.read().toasts.clone();

    rsx! {
        div {
            class: "toast-layer",
            "aria-live": "polite",
            style: "position: fixed; bottom: 4.5rem; right: 1rem; z-index: 9999; display: flex; flex-direction: column; gap: 0.5rem; max-width: 320px;",

            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    role: "status",
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; padding: 0.65rem 0.85rem; background: var(--window-bg, #1f2937); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); font-size: 0.875rem; {severity_style(toast.severity)}",

                    span { "{toast.message}" }
                    button {
                        style: "background: transparent; color: var(--text-secondary, #9ca3af); border: none; cursor: pointer; font-size: 1rem; line-height: 1;",
                        "aria-label": "Dismiss notification",
                        onclick: move |_| TOASTS.write().dismiss(toast.id),
                        "×"
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
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push("one".into(), Severity::Info, 1000);
        let b = queue.push("two".into(), Severity::Error, 1000);
        assert!(b > a);
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push("gone".into(), Severity::Warning, 1000);
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.toasts.is_empty());
    }
}
