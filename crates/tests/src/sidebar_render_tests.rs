use dioxus::prelude::*;
use kit_state::{CollapseMode, SidebarSide, SidebarVariant};
use kit_ui::{
    KitProvider, Sidebar, SidebarContent, SidebarGroup, SidebarGroupAction, SidebarGroupLabel,
    SidebarInset, SidebarMenu, SidebarMenuAction, SidebarMenuBadge, SidebarMenuButton,
    SidebarMenuItem, SidebarMenuSub, SidebarMenuSubButton, SidebarMenuSubItem, SidebarProvider,
    SidebarRail, SidebarSeparator, SidebarTrigger,
};

use crate::common::render;

#[test]
fn provider_starts_expanded_on_desktop() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                SidebarProvider {
                    Sidebar {
                        SidebarContent { "Navigation" }
                    }
                    SidebarInset {
                        SidebarTrigger {}
                        "Page"
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="sidebar-wrapper""#));
    assert!(html.contains(r#"data-state="expanded""#));
    assert!(html.contains(r#"data-side="left""#));
    assert!(html.contains(r#"data-variant="sidebar""#));
    assert!(html.contains(r#"data-collapsible="offcanvas""#));
    assert!(html.contains(r#"data-slot="sidebar-container""#));
    assert!(html.contains(r#"id="sidebar-1""#));
    assert!(html.contains("Navigation"));
    assert!(!html.contains("sidebar-portal"));
    assert!(!html.contains("data-mobile"));
    assert!(html.contains(r#"aria-label="Toggle sidebar""#));
    assert!(html.contains(r#"aria-controls="sidebar-1""#));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("<main"));
}

#[test]
fn collapsed_icon_sidebar_reports_its_mode() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                SidebarProvider {
                    default_open: false,
                    side: SidebarSide::Right,
                    variant: SidebarVariant::Floating,
                    collapse: CollapseMode::Icon,
                    Sidebar { SidebarRail {} }
                    SidebarTrigger {}
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-state="collapsed""#));
    assert!(html.contains(r#"data-side="right""#));
    assert!(html.contains(r#"data-variant="floating""#));
    assert!(html.contains(r#"data-collapsible="icon""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"data-slot="sidebar-rail""#));
}

#[test]
fn non_collapsible_sidebar_skips_the_container() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                SidebarProvider { collapse: CollapseMode::None,
                    Sidebar { "Fixed" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Fixed"));
    assert!(!html.contains("sidebar-container"));
    assert!(html.contains(r#"data-collapsible="none""#));
}

#[test]
fn menu_parts_carry_their_markers() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                SidebarProvider {
                    Sidebar {
                        SidebarGroup {
                            SidebarGroupLabel { "Projects" }
                            SidebarGroupAction { "+" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    SidebarMenuButton { active: true, "Inbox" }
                                    SidebarMenuAction { show_on_hover: true, "..." }
                                    SidebarMenuBadge { "24" }
                                    SidebarMenuSub {
                                        SidebarMenuSubItem {
                                            SidebarMenuSubButton { href: "/archive", "Archive" }
                                        }
                                    }
                                }
                            }
                        }
                        SidebarSeparator {}
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="sidebar-group-action""#));
    assert!(html.contains(r#"data-active="true""#));
    assert!(html.contains(r#"data-show-on-hover="true""#));
    assert!(html.contains(r#"data-slot="sidebar-menu-badge""#));
    assert!(html.contains(r#"href="/archive""#));
    assert!(html.contains(r#"data-active="false""#));
    assert!(html.contains(r#"role="separator""#));
    assert!(html.contains(r#"data-orientation="horizontal""#));
    assert!(html.contains("<ul"));
}
