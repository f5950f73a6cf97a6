use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::{TimerHandle, Timers};

/// The two areas a hover-driven popover spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverRegion {
    Trigger,
    Popover,
}

impl HoverRegion {
    fn other(self) -> Self {
        match self {
            HoverRegion::Trigger => HoverRegion::Popover,
            HoverRegion::Popover => HoverRegion::Trigger,
        }
    }
}

/// Proof that a hide was requested. Only the most recent ticket can hide
/// the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// What the caller should do after the pointer left a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Pointer moved onto the sibling region; nothing to do.
    Stay,
    /// No debounce configured; the popover is already hidden.
    Hidden,
    /// Call [`HoverIntent::hide_elapsed`] with the ticket once the delay passes.
    HideAfter(HideTicket, Duration),
}

/// Hover-intent state for a submenu or tooltip.
///
/// Entering either region shows the popover and voids any pending hide.
/// Leaving towards anything but the sibling region requests a debounced hide,
/// so crossing the gap between trigger and popover does not flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverIntent {
    visible: bool,
    inside: Option<HoverRegion>,
    ticket: u64,
    pending: bool,
    hide_delay: Duration,
}

impl HoverIntent {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            visible: false,
            inside: None,
            ticket: 0,
            pending: false,
            hide_delay,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending
    }

    /// Returns `true` when this made the popover visible.
    pub fn pointer_enter(&mut self, region: HoverRegion) -> bool {
        self.inside = Some(region);
        self.cancel_pending();
        let shown = !self.visible;
        self.visible = true;
        shown
    }

    /// `toward` is the region the pointer moved into, when known.
    pub fn pointer_leave(
        &mut self,
        region: HoverRegion,
        toward: Option<HoverRegion>,
    ) -> LeaveOutcome {
        if toward == Some(region.other()) {
            self.inside = toward;
            return LeaveOutcome::Stay;
        }
        if self.inside == Some(region) {
            self.inside = None;
        }
        if !self.visible {
            return LeaveOutcome::Stay;
        }
        if self.hide_delay.is_zero() {
            self.visible = false;
            self.cancel_pending();
            return LeaveOutcome::Hidden;
        }
        self.ticket += 1;
        self.pending = true;
        LeaveOutcome::HideAfter(HideTicket(self.ticket), self.hide_delay)
    }

    /// The debounce for `ticket` elapsed. Returns `true` if the popover hid.
    pub fn hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if !self.pending || ticket.0 != self.ticket || self.inside.is_some() {
            return false;
        }
        self.pending = false;
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Hide now, bypassing the debounce (e.g. an item was activated).
    pub fn dismiss(&mut self) -> bool {
        self.cancel_pending();
        self.inside = None;
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    fn cancel_pending(&mut self) {
        if self.pending {
            self.ticket += 1;
            self.pending = false;
        }
    }
}

struct Inner {
    intent: HoverIntent,
    timer: Option<TimerHandle>,
}

/// Headless submenu controller: [`HoverIntent`] driven by [`Timers`].
///
/// The same debounce `kit_ui::use_hover` runs with a spawned sleep, on a
/// virtual clock.
#[derive(Clone)]
pub struct HoverController {
    inner: Rc<RefCell<Inner>>,
    timers: Timers,
}

impl HoverController {
    pub fn new(timers: Timers, hide_delay: Duration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                intent: HoverIntent::new(hide_delay),
                timer: None,
            })),
            timers,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().intent.is_visible()
    }

    pub fn enter(&self, region: HoverRegion) {
        let mut inner = self.inner.borrow_mut();
        inner.intent.pointer_enter(region);
        if let Some(timer) = inner.timer.take() {
            timer.cancel();
        }
    }

    pub fn leave(&self, region: HoverRegion, toward: Option<HoverRegion>) {
        let mut inner = self.inner.borrow_mut();
        if let LeaveOutcome::HideAfter(ticket, delay) = inner.intent.pointer_leave(region, toward) {
            if let Some(timer) = inner.timer.take() {
                timer.cancel();
            }
            let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
            inner.timer = Some(self.timers.schedule(delay, move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    inner.timer = None;
                    inner.intent.hide_elapsed(ticket);
                }
            }));
        }
    }

    pub fn activate(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.intent.dismiss();
        if let Some(timer) = inner.timer.take() {
            timer.cancel();
        }
    }
}
