pub mod not_found;
pub mod overlays;
pub mod overview;
pub mod signup;

use dioxus::prelude::*;
use kit_ui::kit_state::CollapseMode;
use kit_ui::{
    KitProvider, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent,
    SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuBadge,
    SidebarMenuButton, SidebarMenuItem, SidebarMenuSub, SidebarMenuSubButton, SidebarMenuSubItem,
    SidebarProvider, SidebarRail, SidebarSeparator, SidebarTrigger,
};

use not_found::NotFound;
use overlays::Overlays;
use overview::Overview;
use signup::Signup;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Overview {},
    #[route("/overlays")]
    Overlays {},
    #[route("/signup")]
    Signup {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let page_title = match &route {
        Route::Overview {} => "Elements",
        Route::Overlays {} => "Overlays",
        Route::Signup {} => "Form",
        Route::NotFound { .. } => "",
    };

    let config = use_hook(crate::kit_config);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        // Inside the router so portalled overlays can still navigate.
        KitProvider { config,
            SidebarProvider { collapse: CollapseMode::Icon,
                Sidebar {
                    SidebarHeader {
                        span { class: "gallery-brand", "Component Kit" }
                    }
                    SidebarSeparator {}
                    SidebarContent {
                        SidebarGroup {
                            SidebarGroupLabel { "Showcase" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        NavButton { to: Route::Overview {}, label: "Elements", active: matches!(route, Route::Overview {}) }
                                    }
                                    SidebarMenuItem {
                                        NavButton { to: Route::Overlays {}, label: "Overlays", active: matches!(route, Route::Overlays {}) }
                                    }
                                    SidebarMenuItem {
                                        NavButton { to: Route::Signup {}, label: "Form", active: matches!(route, Route::Signup {}) }
                                        SidebarMenuBadge { "5" }
                                        SidebarMenuSub {
                                            SidebarMenuSubItem {
                                                SidebarMenuSubButton { href: "/signup#password", "Password rules" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    SidebarFooter {
                        span { class: "gallery-hint", "Press B to toggle" }
                    }
                    SidebarRail {}
                }
                SidebarInset {
                    header { class: "gallery-header",
                        SidebarTrigger {}
                        h1 { class: "gallery-title", "{page_title}" }
                    }
                    div { class: "gallery-page",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(to: Route, label: &'static str, active: bool) -> Element {
    let nav = navigator();

    rsx! {
        SidebarMenuButton {
            active,
            onclick: move |_| {
                nav.push(to.clone());
            },
            "{label}"
        }
    }
}
