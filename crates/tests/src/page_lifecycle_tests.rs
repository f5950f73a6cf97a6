//! Several headless controllers sharing one document, the way a page
//! composes a sidebar, a dialog and a submenu.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kit_state::{
    AnchorId, HoverController, HoverRegion, Host, Overlay, OverlayOptions, PortalHost,
    SidebarController, SidebarEvent, SidebarOptions, Timers,
};
use pretty_assertions::assert_eq;

const EXIT: Duration = Duration::from_millis(200);
const BREAKPOINT: u32 = 768;

struct Page {
    host: Rc<Host>,
    timers: Timers,
    portals: Rc<PortalHost<AnchorId>>,
    sidebar: SidebarController,
    dialog: Overlay,
}

fn page(width: u32) -> Page {
    let host = Rc::new(Host::new(width));
    let timers = Timers::new();
    let portals = Rc::new(PortalHost::new(timers.clone(), EXIT));
    let sidebar = SidebarController::new(
        AnchorId::new("sidebar", "1"),
        SidebarOptions::default(),
        &host,
        timers.clone(),
        Rc::clone(&portals),
        BREAKPOINT,
        EXIT,
    );
    let dialog = Overlay::with_portal_host(
        AnchorId::new("dialog", "2"),
        OverlayOptions::modal(EXIT),
        Rc::clone(&host),
        timers.clone(),
        Rc::clone(&portals),
    );
    Page {
        host,
        timers,
        portals,
        sidebar,
        dialog,
    }
}

#[test]
fn escape_closes_every_dismissable_layer_on_mobile() {
    let p = page(500);
    assert!(p.sidebar.is_open());
    assert_eq!(p.portals.len(), 1);

    p.dialog.open();
    assert_eq!(p.portals.last(), Some(AnchorId::new("dialog", "2")));
    assert_eq!(p.portals.len(), 2);

    p.host.press("Escape");
    assert!(!p.dialog.is_open());
    assert!(!p.sidebar.is_open());
    // Content stays mounted for the exit animation.
    assert_eq!(p.portals.len(), 2);

    p.timers.advance(EXIT);
    assert!(p.portals.is_empty());
    assert_eq!(p.host.listener_count(), p.sidebar.listener_count());
    assert!(!p.host.is_scroll_locked());
}

#[test]
fn clicks_inside_the_dialog_keep_it_open() {
    let p = page(1280);
    p.dialog.open();

    p.host.click(Some(AnchorId::new("dialog", "2")));
    assert!(p.dialog.is_open());

    p.host.click(Some(AnchorId::new("sidebar", "1")));
    assert!(!p.dialog.is_open());
    // The desktop sidebar ignores outside clicks.
    assert!(p.sidebar.is_open());
}

#[test]
fn breakpoint_crossing_only_closes_the_sidebar() {
    let p = page(1280);
    let forced = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&forced);
    let _sub = p.sidebar.subscribe(move |event| {
        if matches!(event, SidebarEvent::Closed { forced: true }) {
            *seen.borrow_mut() += 1;
        }
    });
    p.dialog.open();

    p.host.resize_to(600);
    p.host.resize_to(500);
    p.host.resize_to(400);

    assert_eq!(*forced.borrow(), 1);
    assert!(!p.sidebar.is_open());
    assert!(p.dialog.is_open());
}

#[test]
fn rapid_reopen_keeps_the_new_portal() {
    let p = page(1280);
    p.dialog.open();
    p.dialog.close();
    p.timers.advance(EXIT / 2);
    p.dialog.open();
    p.timers.advance(EXIT * 2);
    assert!(p.dialog.is_open());
    assert_eq!(p.portals.last(), Some(AnchorId::new("dialog", "2")));
}

#[test]
fn submenu_survives_the_gap_between_trigger_and_popover() {
    let timers = Timers::new();
    let submenu = HoverController::new(timers.clone(), Duration::from_millis(150));

    submenu.enter(HoverRegion::Trigger);
    submenu.leave(HoverRegion::Trigger, None);
    timers.advance(Duration::from_millis(100));
    submenu.enter(HoverRegion::Popover);
    timers.advance(Duration::from_millis(300));
    assert!(submenu.is_visible());

    submenu.leave(HoverRegion::Popover, None);
    timers.advance(Duration::from_millis(150));
    assert!(!submenu.is_visible());
}
