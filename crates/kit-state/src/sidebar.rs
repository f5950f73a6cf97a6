use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    AnchorId, Channel, Host, Key, ListenerScope, OverlayState, Portal, PortalHost, Subscription,
    TimerHandle, Timers, Transition,
};

/// Layout the viewport width selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// Widths strictly below `breakpoint` are mobile.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSide {
    #[default]
    Left,
    Right,
}

impl SidebarSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarSide::Left => "left",
            SidebarSide::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarVariant {
    #[default]
    Sidebar,
    Floating,
    Inset,
}

impl SidebarVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarVariant::Sidebar => "sidebar",
            SidebarVariant::Floating => "floating",
            SidebarVariant::Inset => "inset",
        }
    }
}

/// How the desktop sidebar collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseMode {
    /// Slides fully out of view.
    #[default]
    Offcanvas,
    /// Shrinks to an icon rail.
    Icon,
    /// Always expanded on desktop.
    None,
}

impl CollapseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollapseMode::Offcanvas => "offcanvas",
            CollapseMode::Icon => "icon",
            CollapseMode::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarOptions {
    pub side: SidebarSide,
    pub variant: SidebarVariant,
    pub collapse: CollapseMode,
}

/// Keyboard shortcut that toggles the sidebar.
pub const SIDEBAR_SHORTCUT: char = 'b';

/// Responsive sidebar state.
///
/// On desktop the sidebar expands and collapses in place. On mobile it is
/// an overlay rendered through a portal, with an exit phase while its
/// closing animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarModel {
    state: OverlayState,
    mode: ViewportMode,
    options: SidebarOptions,
    breakpoint: u32,
}

impl SidebarModel {
    pub fn new(options: SidebarOptions, open: bool, width: u32, breakpoint: u32) -> Self {
        Self {
            state: OverlayState::new(open),
            mode: ViewportMode::for_width(width, breakpoint),
            options,
            breakpoint,
        }
    }

    pub fn options(&self) -> SidebarOptions {
        self.options
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn is_mobile(&self) -> bool {
        self.mode == ViewportMode::Mobile
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Value for the wrapper's `data-state` attribute.
    pub fn data_state(&self) -> &'static str {
        if self.is_open() {
            "expanded"
        } else {
            "collapsed"
        }
    }

    /// Mobile content belongs in a portal while open or animating out.
    pub fn renders_portal(&self) -> bool {
        self.is_mobile() && self.state.is_mounted()
    }

    pub fn open(&mut self) -> Transition {
        self.state.open()
    }

    pub fn close(&mut self) -> Transition {
        self.close_in(self.mode)
    }

    fn close_in(&mut self, mode: ViewportMode) -> Transition {
        match mode {
            ViewportMode::Mobile => self.state.close(),
            ViewportMode::Desktop => self.state.close_now(),
        }
    }

    pub fn toggle(&mut self) -> Transition {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn finish_close(&mut self, generation: u64) -> bool {
        self.state.finish_close(generation)
    }

    /// Apply a new viewport width. Crossing the breakpoint while open
    /// forces a close; returns `true` when that happened.
    pub fn resize(&mut self, width: u32) -> bool {
        let previous = self.mode;
        self.mode = ViewportMode::for_width(width, self.breakpoint);
        if previous != self.mode && self.is_open() {
            self.close_in(previous);
            tracing::debug!(?previous, mode = ?self.mode, "sidebar closed by breakpoint change");
            return true;
        }
        false
    }

    /// React to a key press: the shortcut toggles, Escape closes the
    /// mobile overlay.
    pub fn key(&mut self, key: &Key) -> Transition {
        match key {
            Key::Character(c) if *c == SIDEBAR_SHORTCUT => {
                if self.options.collapse != CollapseMode::None || self.is_mobile() {
                    self.toggle()
                } else {
                    Transition::Unchanged
                }
            }
            Key::Escape if self.is_mobile() && self.is_open() => self.close(),
            _ => Transition::Unchanged,
        }
    }
}

/// Notification published on a sidebar's own channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    Opened,
    Closed { forced: bool },
}

struct Inner {
    model: SidebarModel,
    portal: Option<Portal<AnchorId>>,
    pending_close: Option<TimerHandle>,
}

struct Shared {
    id: AnchorId,
    portals: Rc<PortalHost<AnchorId>>,
    timers: Timers,
    exit_delay: std::time::Duration,
    events: Channel<SidebarEvent>,
    inner: RefCell<Inner>,
}

/// Headless sidebar controller.
///
/// Drives [`SidebarModel`] against a [`Host`] and [`Timers`], mirroring what
/// `kit_ui::SidebarProvider` does with document listeners and tasks.
///
/// Holds permanent keydown and resize listeners for its whole life; they are
/// released by [`SidebarController::dispose`] or when the controller drops.
pub struct SidebarController {
    shared: Rc<Shared>,
    scope: ListenerScope,
}

impl SidebarController {
    pub fn new(
        id: AnchorId,
        options: SidebarOptions,
        host: &Host,
        timers: Timers,
        portals: Rc<PortalHost<AnchorId>>,
        breakpoint: u32,
        exit_delay: std::time::Duration,
    ) -> Self {
        let model = SidebarModel::new(options, true, host.viewport().width, breakpoint);
        let shared = Rc::new(Shared {
            events: Channel::new(id.event_name("state")),
            id,
            portals,
            timers,
            exit_delay,
            inner: RefCell::new(Inner {
                model,
                portal: None,
                pending_close: None,
            }),
        });
        Shared::sync_portal(&shared);

        let mut scope = ListenerScope::new();
        let weak = Rc::downgrade(&shared);
        scope.add(host.keydown.subscribe(move |key| {
            if let Some(shared) = weak.upgrade() {
                let transition = shared.inner.borrow_mut().model.key(key);
                Shared::after(&shared, transition, false);
            }
        }));
        let weak = Rc::downgrade(&shared);
        scope.add(host.resize.subscribe(move |viewport| {
            if let Some(shared) = weak.upgrade() {
                let forced = shared.inner.borrow_mut().model.resize(viewport.width);
                if forced {
                    Shared::after(&shared, Transition::Closed, true);
                }
            }
        }));

        Self { shared, scope }
    }

    pub fn id(&self) -> &AnchorId {
        &self.shared.id
    }

    pub fn model(&self) -> SidebarModel {
        self.shared.inner.borrow().model
    }

    pub fn is_open(&self) -> bool {
        self.model().is_open()
    }

    pub fn subscribe(&self, handler: impl Fn(&SidebarEvent) + 'static) -> Subscription {
        self.shared.events.subscribe(handler)
    }

    pub fn open(&self) -> bool {
        let transition = self.shared.inner.borrow_mut().model.open();
        Shared::after(&self.shared, transition, false)
    }

    pub fn close(&self) -> bool {
        let transition = self.shared.inner.borrow_mut().model.close();
        Shared::after(&self.shared, transition, false)
    }

    pub fn toggle(&self) -> bool {
        let transition = self.shared.inner.borrow_mut().model.toggle();
        Shared::after(&self.shared, transition, false)
    }

    /// Listeners this instance holds on the host.
    pub fn listener_count(&self) -> usize {
        self.scope.len()
    }

    pub fn dispose(&mut self) {
        self.scope.dispose();
        let mut inner = self.shared.inner.borrow_mut();
        if let Some(timer) = inner.pending_close.take() {
            timer.cancel();
        }
        inner.portal = None;
    }
}

impl Shared {
    fn after(this: &Rc<Shared>, transition: Transition, forced: bool) -> bool {
        if !transition.changed() {
            return false;
        }
        Shared::sync_portal(this);
        let event = match transition {
            Transition::Opened | Transition::Reopened => SidebarEvent::Opened,
            _ => SidebarEvent::Closed { forced },
        };
        this.events.publish(&event);
        true
    }

    /// Bring the portal in line with the model.
    fn sync_portal(this: &Rc<Shared>) {
        let mut inner = this.inner.borrow_mut();
        let state = inner.model.state();
        let wants_portal = inner.model.renders_portal();

        if state.is_open() {
            if let Some(timer) = inner.pending_close.take() {
                timer.cancel();
            }
            if !wants_portal {
                return;
            }
            if let Some(portal) = &inner.portal {
                portal.reopen();
            } else {
                inner.portal = Some(this.portals.acquire(this.id.clone()));
            }
        } else if state.is_mounted() {
            if inner.pending_close.is_some() {
                return;
            }
            if let Some(portal) = &inner.portal {
                portal.close();
            }
            let generation = state.generation();
            let weak = Rc::downgrade(this);
            inner.pending_close = Some(this.timers.schedule(this.exit_delay, move || {
                if let Some(this) = weak.upgrade() {
                    let mut inner = this.inner.borrow_mut();
                    inner.pending_close = None;
                    inner.model.finish_close(generation);
                }
            }));
        } else if let Some(portal) = &inner.portal {
            portal.close();
        }
    }
}
