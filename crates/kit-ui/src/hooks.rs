use dioxus::dioxus_core::Task;
use std::time::Duration;

use dioxus::prelude::*;
use kit_state::{
    AnchorId, HoverIntent, HoverRegion, LeaveOutcome, OverlayOptions, OverlayPhase, OverlayState,
    Transition,
};
use serde::Deserialize;

use crate::use_kit;

/// Wait for `duration` on whichever executor the renderer runs.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo::timers::future::sleep(duration).await;
}

/// Allocate an id for this component instance. Stable across re-renders.
pub fn use_anchor_id(component: &'static str) -> AnchorId {
    let kit = use_kit();
    use_hook(move || kit.next_id(component))
}

// ─── Document listeners ────────────────────────────────────────────────

/// Messages posted back from listeners installed on `document`/`window`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DomMessage {
    Escape,
    Outside,
    Key { key: String },
    Resize { width: u32 },
    /// Initial measurement sent as soon as a listener is installed.
    Viewport { width: u32 },
}

/// A script-side listener that forwards [`DomMessage`]s until disposed.
///
/// The script must `await dioxus.recv()` and remove its listeners once that
/// resolves; [`DomListener::dispose`] sends the message that releases it.
#[derive(Clone)]
pub struct DomListener {
    eval: document::Eval,
    task: Task,
}

impl DomListener {
    pub fn start(script: &str, mut on_message: impl FnMut(DomMessage) + 'static) -> Self {
        let eval = document::eval(script);
        let mut rx = eval.clone();
        let task = spawn(async move {
            loop {
                match rx.recv::<DomMessage>().await {
                    Ok(message) => on_message(message),
                    Err(err) => {
                        tracing::debug!(?err, "document listener stopped");
                        break;
                    }
                }
            }
        });
        Self { eval, task }
    }

    pub fn dispose(self) {
        if let Err(err) = self.eval.send("dispose") {
            tracing::debug!(?err, "document listener already gone");
        }
        self.task.cancel();
    }
}

const DISMISS_SCRIPT: &str = r#"
const owner = "__OWNER__";
const onKey = (e) => {
    if (e.key === "Escape") dioxus.send({ kind: "escape" });
};
const onPointer = (e) => {
    if (!e.target.closest('[data-owner="' + owner + '"]')) dioxus.send({ kind: "outside" });
};
if (__ESCAPE__) document.addEventListener("keydown", onKey);
if (__OUTSIDE__) document.addEventListener("pointerdown", onPointer);
await dioxus.recv();
document.removeEventListener("keydown", onKey);
document.removeEventListener("pointerdown", onPointer);
"#;

fn dismiss_script(owner: &str, options: OverlayOptions) -> String {
    DISMISS_SCRIPT
        .replace("__OWNER__", owner)
        .replace("__ESCAPE__", &options.dismiss_on_escape.to_string())
        .replace("__OUTSIDE__", &options.dismiss_on_outside_click.to_string())
}

/// Hide body overflow while a modal is open. Locks nest.
pub fn lock_scroll() {
    document::eval(
        r#"
        const body = document.body;
        const locks = Number(body.dataset.kitScrollLocks || 0) + 1;
        body.dataset.kitScrollLocks = String(locks);
        body.style.overflow = "hidden";
        "#,
    );
}

pub fn unlock_scroll() {
    document::eval(
        r#"
        const body = document.body;
        const locks = Math.max(Number(body.dataset.kitScrollLocks || 0) - 1, 0);
        if (locks === 0) {
            delete body.dataset.kitScrollLocks;
            body.style.overflow = "";
        } else {
            body.dataset.kitScrollLocks = String(locks);
        }
        "#,
    );
}

// ─── Overlay ───────────────────────────────────────────────────────────

/// Handle to an overlay's [`OverlayState`], shared with its trigger and
/// content through context.
#[derive(Clone, Copy, PartialEq)]
pub struct OverlayHandle {
    id: Signal<AnchorId>,
    state: Signal<OverlayState>,
    exit_delay: Duration,
}

impl OverlayHandle {
    pub fn id(&self) -> AnchorId {
        self.id.read().clone()
    }

    pub fn state(&self) -> OverlayState {
        *self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.read().is_mounted()
    }

    pub fn data_state(&self) -> &'static str {
        self.state.read().data_state()
    }

    pub fn open(self) -> bool {
        self.apply(OverlayState::open)
    }

    pub fn close(self) -> bool {
        if self.exit_delay.is_zero() {
            self.apply(OverlayState::close_now)
        } else {
            self.apply(OverlayState::close)
        }
    }

    pub fn toggle(self) -> bool {
        if self.state.peek().is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn set_open(self, open: bool) -> bool {
        if open {
            self.open()
        } else {
            self.close()
        }
    }

    /// The exit animation finished; unmount without waiting for the timer.
    pub fn transition_end(self) -> bool {
        let generation = self.state.peek().generation();
        finish_close(self.state, generation)
    }

    fn apply(mut self, step: fn(&mut OverlayState) -> Transition) -> bool {
        let mut next = *self.state.peek();
        let transition = step(&mut next);
        if !transition.changed() {
            return false;
        }
        tracing::debug!(id = %self.id.peek().as_str(), ?transition, "overlay transition");
        self.state.set(next);
        true
    }
}

fn finish_close(mut state: Signal<OverlayState>, generation: u64) -> bool {
    let mut next = *state.peek();
    if !next.finish_close(generation) {
        return false;
    }
    state.set(next);
    true
}

/// Own an overlay for the lifetime of the calling component.
///
/// While open, Escape and outside-click listeners are installed on the
/// document (as `options` allow) and the body scroll is locked for modals.
/// Closing removes them; a close with an exit delay keeps content mounted
/// until the animation ends or the delay passes, whichever is first. A
/// reopen cancels the pending unmount.
pub fn use_overlay(
    component: &'static str,
    options: OverlayOptions,
    default_open: bool,
) -> OverlayHandle {
    let anchor = use_anchor_id(component);
    let id = use_signal(|| anchor);
    let state = use_signal(|| OverlayState::new(default_open));
    let handle = OverlayHandle {
        id,
        state,
        exit_delay: options.exit_delay,
    };

    let mut cycle: Signal<Option<DomListener>> = use_signal(|| None);
    let mut scroll_locked = use_signal(|| false);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let current = state();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }

        if current.is_open() {
            let dismissable = options.dismiss_on_escape || options.dismiss_on_outside_click;
            if dismissable && cycle.peek().is_none() {
                let owner = id.peek().as_str();
                let listener = DomListener::start(&dismiss_script(&owner, options), move |message| {
                    if matches!(message, DomMessage::Escape | DomMessage::Outside) {
                        handle.close();
                    }
                });
                cycle.set(Some(listener));
            }
            if options.lock_scroll && !*scroll_locked.peek() {
                lock_scroll();
                scroll_locked.set(true);
            }
            return;
        }

        if let Some(listener) = cycle.write().take() {
            listener.dispose();
        }
        if *scroll_locked.peek() {
            unlock_scroll();
            scroll_locked.set(false);
        }
        if current.phase() == OverlayPhase::Closing {
            let generation = current.generation();
            let delay = options.exit_delay;
            pending.set(Some(spawn(async move {
                sleep(delay).await;
                finish_close(state, generation);
            })));
        }
    });

    use_drop(move || {
        if let Ok(mut cycle) = cycle.try_write() {
            if let Some(listener) = cycle.take() {
                listener.dispose();
            }
        }
        if scroll_locked.try_peek().map(|locked| *locked).unwrap_or(false) {
            unlock_scroll();
        }
    });

    handle
}

// ─── Hover intent ──────────────────────────────────────────────────────

/// Handle to a [`HoverIntent`] driven by pointer events.
#[derive(Clone, Copy, PartialEq)]
pub struct HoverHandle {
    intent: Signal<HoverIntent>,
}

impl HoverHandle {
    pub fn is_visible(&self) -> bool {
        self.intent.read().is_visible()
    }

    pub fn enter(mut self, region: HoverRegion) {
        let mut next = *self.intent.peek();
        next.pointer_enter(region);
        if next != *self.intent.peek() {
            self.intent.set(next);
        }
    }

    /// Pointer events here carry no related target, so the sibling region
    /// is unknown; entering it cancels the pending hide instead.
    pub fn leave(mut self, region: HoverRegion) {
        let mut next = *self.intent.peek();
        let outcome = next.pointer_leave(region, None);
        self.intent.set(next);
        if let LeaveOutcome::HideAfter(ticket, delay) = outcome {
            let mut intent = self.intent;
            spawn(async move {
                sleep(delay).await;
                let mut next = *intent.peek();
                if next.hide_elapsed(ticket) {
                    intent.set(next);
                }
            });
        }
    }

    pub fn dismiss(mut self) {
        let mut next = *self.intent.peek();
        if next.dismiss() {
            self.intent.set(next);
        }
    }
}

pub fn use_hover(hide_delay: Duration) -> HoverHandle {
    let intent = use_signal(|| HoverIntent::new(hide_delay));
    HoverHandle { intent }
}
