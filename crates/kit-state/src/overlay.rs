use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::{
    AnchorId, Channel, Host, Key, ListenerScope, Portal, PortalHost, PortalStatus, Subscription,
    TimerHandle, Timers,
};

/// Where an overlay is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Open,
    /// Closed from the user's point of view, content still mounted while the
    /// exit animation plays.
    Closing,
}

/// Result of asking an overlay to change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    /// Opened while a close was still animating; the pending close is void.
    Reopened,
    Closing,
    Closed,
    Unchanged,
}

impl Transition {
    pub fn changed(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// Open/closed state shared by Dialog, Sheet, Sidebar, Collapsible and the
/// popover roots.
///
/// Every transition bumps `generation`, so a deferred `finish_close` from an
/// earlier cycle can never unmount content that was opened again since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    phase: OverlayPhase,
    generation: u64,
}

impl OverlayState {
    pub fn new(open: bool) -> Self {
        Self {
            phase: if open {
                OverlayPhase::Open
            } else {
                OverlayPhase::Closed
            },
            generation: 0,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Content should be in the tree: open, or closing with its exit
    /// animation still running.
    pub fn is_mounted(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// Value for the `data-state` attribute.
    pub fn data_state(&self) -> &'static str {
        if self.is_open() {
            "open"
        } else {
            "closed"
        }
    }

    pub fn open(&mut self) -> Transition {
        match self.phase {
            OverlayPhase::Open => Transition::Unchanged,
            OverlayPhase::Closed => {
                self.phase = OverlayPhase::Open;
                self.generation += 1;
                Transition::Opened
            }
            OverlayPhase::Closing => {
                self.phase = OverlayPhase::Open;
                self.generation += 1;
                Transition::Reopened
            }
        }
    }

    /// Begin closing. Content stays mounted until [`finish_close`](Self::finish_close).
    pub fn close(&mut self) -> Transition {
        match self.phase {
            OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                self.generation += 1;
                Transition::Closing
            }
            OverlayPhase::Closing | OverlayPhase::Closed => Transition::Unchanged,
        }
    }

    /// Close without an exit animation.
    pub fn close_now(&mut self) -> Transition {
        match self.phase {
            OverlayPhase::Closed => Transition::Unchanged,
            OverlayPhase::Open | OverlayPhase::Closing => {
                self.phase = OverlayPhase::Closed;
                self.generation += 1;
                Transition::Closed
            }
        }
    }

    /// Complete a close started in `generation`. Stale generations are ignored.
    pub fn finish_close(&mut self, generation: u64) -> bool {
        if self.phase == OverlayPhase::Closing && self.generation == generation {
            self.phase = OverlayPhase::Closed;
            true
        } else {
            false
        }
    }

    pub fn toggle(&mut self) -> Transition {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }
}

/// Which behaviours an overlay wires up while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub dismiss_on_escape: bool,
    pub dismiss_on_outside_click: bool,
    pub portal: bool,
    pub lock_scroll: bool,
    /// How long closed content stays mounted for its exit animation.
    pub exit_delay: Duration,
}

impl OverlayOptions {
    /// Dialog and Sheet: portalled, scroll-locking, dismissable.
    pub fn modal(exit_delay: Duration) -> Self {
        Self {
            dismiss_on_escape: true,
            dismiss_on_outside_click: true,
            portal: true,
            lock_scroll: true,
            exit_delay,
        }
    }

    /// DropdownMenu and Select roots: light-dismiss, rendered in place.
    pub fn popover() -> Self {
        Self {
            dismiss_on_escape: true,
            dismiss_on_outside_click: true,
            portal: false,
            lock_scroll: false,
            exit_delay: Duration::ZERO,
        }
    }

    /// Collapsible: only explicit triggers change state.
    pub fn inline() -> Self {
        Self {
            dismiss_on_escape: false,
            dismiss_on_outside_click: false,
            portal: false,
            lock_scroll: false,
            exit_delay: Duration::ZERO,
        }
    }
}

/// Notification published on an overlay's own channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Opened,
    Closed,
}

struct Inner {
    state: OverlayState,
    cycle: ListenerScope,
    portal: Option<Portal<AnchorId>>,
    pending_close: Option<TimerHandle>,
    scroll_locked: bool,
}

struct Shared {
    id: AnchorId,
    options: OverlayOptions,
    host: Rc<Host>,
    timers: Timers,
    portals: Option<Rc<PortalHost<AnchorId>>>,
    events: Channel<OverlayEvent>,
    inner: RefCell<Inner>,
}

impl Drop for Shared {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        if let Some(timer) = inner.pending_close.take() {
            timer.cancel();
        }
        if inner.scroll_locked {
            self.host.unlock_scroll();
        }
    }
}

/// Headless overlay controller.
///
/// Wires [`OverlayState`] to a [`Host`] and [`Timers`] the same way
/// `kit_ui::use_overlay` wires it to the DOM, so listener, scroll-lock and
/// portal lifetimes can be exercised without a renderer.
///
/// Escape and outside-click listeners exist only while the overlay is open;
/// closing disposes them, and dropping the last handle releases the portal
/// and any scroll lock.
#[derive(Clone)]
pub struct Overlay {
    shared: Rc<Shared>,
}

impl Overlay {
    pub fn new(id: AnchorId, options: OverlayOptions, host: Rc<Host>, timers: Timers) -> Self {
        Self::build(id, options, host, timers, None)
    }

    /// Portalled overlays relocate their content into `portals` on open.
    pub fn with_portal_host(
        id: AnchorId,
        options: OverlayOptions,
        host: Rc<Host>,
        timers: Timers,
        portals: Rc<PortalHost<AnchorId>>,
    ) -> Self {
        Self::build(id, options, host, timers, Some(portals))
    }

    fn build(
        id: AnchorId,
        options: OverlayOptions,
        host: Rc<Host>,
        timers: Timers,
        portals: Option<Rc<PortalHost<AnchorId>>>,
    ) -> Self {
        let events = Channel::new(id.event_name("state"));
        Self {
            shared: Rc::new(Shared {
                id,
                options,
                host,
                timers,
                portals,
                events,
                inner: RefCell::new(Inner {
                    state: OverlayState::default(),
                    cycle: ListenerScope::new(),
                    portal: None,
                    pending_close: None,
                    scroll_locked: false,
                }),
            }),
        }
    }

    pub fn id(&self) -> &AnchorId {
        &self.shared.id
    }

    pub fn state(&self) -> OverlayState {
        self.shared.inner.borrow().state
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn data_state(&self) -> &'static str {
        self.state().data_state()
    }

    /// Listeners registered for the current open cycle.
    pub fn cycle_listeners(&self) -> usize {
        self.shared.inner.borrow().cycle.len()
    }

    pub fn portal_status(&self) -> Option<PortalStatus> {
        self.shared.inner.borrow().portal.as_ref().map(|p| p.status())
    }

    pub fn subscribe(&self, handler: impl Fn(&OverlayEvent) + 'static) -> Subscription {
        self.shared.events.subscribe(handler)
    }

    pub fn open(&self) -> bool {
        Shared::open(&self.shared)
    }

    pub fn close(&self) -> bool {
        Shared::close(&self.shared)
    }

    pub fn toggle(&self) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// The exit animation finished; unmount without waiting for the timer.
    pub fn transition_end(&self) -> bool {
        let generation = self.state().generation();
        Shared::finish_close(&self.shared, generation)
    }

    /// Tear down immediately: listeners, pending timer, portal and scroll
    /// lock are all released and the overlay ends up Closed.
    pub fn dispose(&self) {
        let mut inner = self.shared.inner.borrow_mut();
        inner.state.close_now();
        inner.cycle.dispose();
        if let Some(timer) = inner.pending_close.take() {
            timer.cancel();
        }
        inner.portal = None;
        if inner.scroll_locked {
            self.shared.host.unlock_scroll();
            inner.scroll_locked = false;
        }
    }
}

impl Shared {
    fn open(this: &Rc<Shared>) -> bool {
        let transition = {
            let mut inner = this.inner.borrow_mut();
            let transition = inner.state.open();
            if !transition.changed() {
                return false;
            }
            if let Some(timer) = inner.pending_close.take() {
                timer.cancel();
            }

            if this.options.portal {
                if inner.portal.is_some() {
                    if let Some(portal) = &inner.portal {
                        portal.reopen();
                    }
                } else if let Some(portals) = &this.portals {
                    inner.portal = Some(portals.acquire(this.id.clone()));
                } else {
                    tracing::warn!(
                        id = %this.id,
                        "portalled overlay has no portal host, rendering in place"
                    );
                }
            }

            if this.options.lock_scroll && !inner.scroll_locked {
                this.host.lock_scroll();
                inner.scroll_locked = true;
            }

            let weak = Rc::downgrade(this);
            if this.options.dismiss_on_escape {
                let weak = Weak::clone(&weak);
                inner.cycle.add(this.host.keydown.subscribe(move |key| {
                    if *key == Key::Escape {
                        if let Some(this) = weak.upgrade() {
                            Shared::close(&this);
                        }
                    }
                }));
            }
            if this.options.dismiss_on_outside_click {
                let weak = Weak::clone(&weak);
                let id = this.id.clone();
                inner.cycle.add(this.host.pointer_down.subscribe(move |event| {
                    if event.inside.as_ref() != Some(&id) {
                        if let Some(this) = weak.upgrade() {
                            Shared::close(&this);
                        }
                    }
                }));
            }
            transition
        };

        tracing::debug!(id = %this.id, ?transition, "overlay opened");
        this.events.publish(&OverlayEvent::Opened);
        true
    }

    fn close(this: &Rc<Shared>) -> bool {
        let finished = {
            let mut inner = this.inner.borrow_mut();
            if !inner.state.close().changed() {
                return false;
            }
            inner.cycle.dispose();
            if inner.scroll_locked {
                this.host.unlock_scroll();
                inner.scroll_locked = false;
            }
            if let Some(portal) = &inner.portal {
                portal.close();
            }

            let generation = inner.state.generation();
            if this.options.exit_delay.is_zero() {
                inner.state.finish_close(generation);
                if let Some(portal) = &inner.portal {
                    portal.transition_end();
                }
                true
            } else {
                let weak = Rc::downgrade(this);
                inner.pending_close = Some(this.timers.schedule(this.options.exit_delay, move || {
                    if let Some(this) = weak.upgrade() {
                        Shared::finish_close(&this, generation);
                    }
                }));
                false
            }
        };

        tracing::debug!(id = %this.id, finished, "overlay closed");
        this.events.publish(&OverlayEvent::Closed);
        true
    }

    fn finish_close(this: &Rc<Shared>, generation: u64) -> bool {
        let mut inner = this.inner.borrow_mut();
        if !inner.state.finish_close(generation) {
            return false;
        }
        if let Some(timer) = inner.pending_close.take() {
            timer.cancel();
        }
        if let Some(portal) = &inner.portal {
            portal.transition_end();
        }
        true
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.shared.id)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    const EXIT: Duration = Duration::from_millis(200);

    fn dialog() -> (Rc<Host>, Timers, Rc<PortalHost<AnchorId>>, Overlay) {
        let host = Rc::new(Host::default());
        let timers = Timers::new();
        let portals = Rc::new(PortalHost::new(timers.clone(), EXIT));
        let overlay = Overlay::with_portal_host(
            AnchorId::new("dialog", "1"),
            OverlayOptions::modal(EXIT),
            Rc::clone(&host),
            timers.clone(),
            Rc::clone(&portals),
        );
        (host, timers, portals, overlay)
    }

    #[test]
    fn state_machine_transitions() {
        let mut state = OverlayState::new(false);
        assert_eq!(state.open(), Transition::Opened);
        assert_eq!(state.open(), Transition::Unchanged);
        assert_eq!(state.close(), Transition::Closing);
        assert_eq!(state.data_state(), "closed");
        assert!(state.is_mounted());
        assert_eq!(state.close(), Transition::Unchanged);
        let generation = state.generation();
        assert!(state.finish_close(generation));
        assert!(!state.is_mounted());
        assert_eq!(state.close_now(), Transition::Unchanged);
    }

    #[test]
    fn reopen_voids_stale_finish() {
        let mut state = OverlayState::new(true);
        state.close();
        let stale = state.generation();
        assert_eq!(state.toggle(), Transition::Reopened);
        assert!(!state.finish_close(stale));
        assert!(state.is_open());
    }

    #[test]
    fn open_when_open_is_a_no_op() {
        let (host, _timers, portals, overlay) = dialog();
        assert!(overlay.open());
        let listeners = host.listener_count();
        assert!(!overlay.open());
        assert_eq!(host.listener_count(), listeners);
        assert_eq!(portals.len(), 1);
        assert_eq!(overlay.data_state(), "open");
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let (host, timers, _portals, overlay) = dialog();
        assert!(!overlay.close());
        assert_eq!(host.listener_count(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn open_close_cycle_leaves_no_listeners() {
        let (host, timers, portals, overlay) = dialog();
        for _ in 0..3 {
            overlay.open();
            assert_eq!(host.listener_count(), 2);
            assert!(host.is_scroll_locked());
            overlay.close();
            assert_eq!(host.listener_count(), 0);
            assert!(!host.is_scroll_locked());
            timers.advance(EXIT);
        }
        assert!(portals.is_empty());
        assert_eq!(overlay.state().phase(), OverlayPhase::Closed);
    }

    #[test]
    fn escape_closes_but_never_opens() {
        let (host, _timers, _portals, overlay) = dialog();
        host.press("Escape");
        assert!(!overlay.is_open());
        overlay.open();
        host.press("a");
        assert!(overlay.is_open());
        host.press("Escape");
        assert!(!overlay.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let (host, _timers, _portals, overlay) = dialog();
        overlay.open();
        host.click(Some(overlay.id().clone()));
        assert!(overlay.is_open());
        host.click(None);
        assert!(!overlay.is_open());
    }

    #[test]
    fn content_stays_mounted_until_exit_delay() {
        let (_host, timers, portals, overlay) = dialog();
        overlay.open();
        overlay.close();
        assert_eq!(overlay.state().phase(), OverlayPhase::Closing);
        assert_eq!(portals.len(), 1);
        timers.advance(EXIT);
        assert_eq!(overlay.state().phase(), OverlayPhase::Closed);
        assert_eq!(overlay.portal_status(), Some(PortalStatus::Detached));
    }

    #[test]
    fn rapid_reopen_keeps_new_content() {
        let (_host, timers, portals, overlay) = dialog();
        overlay.open();
        overlay.close();
        timers.advance(Duration::from_millis(50));
        overlay.open();
        timers.advance(Duration::from_millis(500));
        assert!(overlay.is_open());
        assert_eq!(portals.children(), vec![overlay.id().clone()]);
    }

    #[test]
    fn transition_end_unmounts_early() {
        let (_host, timers, portals, overlay) = dialog();
        overlay.open();
        overlay.close();
        assert!(overlay.transition_end());
        assert!(portals.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn events_are_published_on_instance_channel() {
        let (_host, _timers, _portals, overlay) = dialog();
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let _sub = {
            let (opened, closed) = (Rc::clone(&opened), Rc::clone(&closed));
            overlay.subscribe(move |e| match e {
                OverlayEvent::Opened => opened.set(opened.get() + 1),
                OverlayEvent::Closed => closed.set(closed.get() + 1),
            })
        };
        overlay.open();
        overlay.open();
        overlay.close();
        overlay.close();
        assert_eq!((opened.get(), closed.get()), (1, 1));
    }

    #[test]
    fn inline_overlay_closes_immediately_without_listeners() {
        let host = Rc::new(Host::default());
        let overlay = Overlay::new(
            AnchorId::new("collapsible", "1"),
            OverlayOptions::inline(),
            Rc::clone(&host),
            Timers::new(),
        );
        overlay.toggle();
        assert_eq!(host.listener_count(), 0);
        assert!(overlay.is_open());
        overlay.toggle();
        assert_eq!(overlay.state().phase(), OverlayPhase::Closed);
    }

    #[test]
    fn dropping_open_overlay_releases_everything() {
        let (host, _timers, portals, overlay) = dialog();
        overlay.open();
        drop(overlay);
        assert_eq!(host.listener_count(), 0);
        assert!(portals.is_empty());
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn dispose_while_closing_releases_everything() {
        let (host, timers, portals, overlay) = dialog();
        overlay.open();
        overlay.close();
        overlay.dispose();
        assert_eq!(overlay.state().phase(), OverlayPhase::Closed);
        assert_eq!(host.listener_count(), 0);
        assert!(portals.is_empty());
        assert_eq!(timers.pending(), 0);
    }
}
