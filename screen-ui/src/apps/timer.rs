//! Countdown timer panel.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use screen_types::Severity;

use crate::notify::{notify, DEFAULT_TOAST_MS};

const DEFAULT_SECS: u32 = 5 * 60;
const PRESETS: [(u32, &str); 4] = [(60, "1 min"), (300, "5 min"), (600, "10 min"), (1800, "30 min")];

pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[component]
pub fn TimerView() -> Element {
    let mut duration = use_signal(|| DEFAULT_SECS);
    let mut remaining = use_signal(|| DEFAULT_SECS);
    let mut running = use_signal(|| false);
    // Bumped on every start/pause/reset so stale tick loops exit.
    let mut run_epoch = use_signal(|| 0u64);

    let start = move |_| {
        if running() || remaining() == 0 {
            return;
        }
        running.set(true);
        let epoch = run_epoch() + 1;
        run_epoch.set(epoch);
        spawn(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                if run_epoch() != epoch || !running() {
                    return;
                }
                let next = remaining().saturating_sub(1);
                remaining.set(next);
                if next == 0 {
                    running.set(false);
                    notify("Timer finished", Severity::Warning, DEFAULT_TOAST_MS);
                    return;
                }
            }
        });
    };

    let pause = move |_| {
        running.set(false);
        run_epoch.set(run_epoch() + 1);
    };

    let reset = move |_| {
        running.set(false);
        run_epoch.set(run_epoch() + 1);
        remaining.set(duration());
    };

    let clock = format_clock(remaining());
    let clock_color = if remaining() == 0 {
        "var(--danger-bg, #ef4444)"
    } else if running() {
        "var(--text-primary, #f8fafc)"
    } else {
        "var(--text-secondary, #94a3b8)"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.75rem; padding: 1rem; height: 100%;",

            div {
                style: "font-size: 2.5rem; font-weight: 700; font-family: monospace; color: {clock_color};",
                "{clock}"
            }

            div {
                style: "display: flex; gap: 0.4rem;",
                if running() {
                    button {
                        style: "padding: 0.4rem 1rem; background: var(--warning-bg, #f59e0b); color: #0f172a; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                        onclick: pause,
                        "Pause"
                    }
                } else {
                    button {
                        style: "padding: 0.4rem 1rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;",
                        onclick: start,
                        "Start"
                    }
                }
                button {
                    style: "padding: 0.4rem 1rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer;",
                    onclick: reset,
                    "Reset"
                }
            }

            div {
                style: "display: flex; gap: 0.3rem; flex-wrap: wrap; justify-content: center;",
                for (secs, label) in PRESETS {
                    button {
                        style: "padding: 0.25rem 0.6rem; background: transparent; color: var(--text-muted, #64748b); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8rem;",
                        onclick: move |_| {
                            running.set(false);
                            run_epoch.set(run_epoch() + 1);
                            duration.set(secs);
                            remaining.set(secs);
                        },
                        "{label}"
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
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(1800), "30:00");
        assert_eq!(format_clock(3599), "59:59");
    }
}
