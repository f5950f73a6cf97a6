use dioxus::prelude::*;
use kit_state::SelectOption;
use kit_ui::{
    DropdownAlign, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuSub,
    DropdownMenuSubContent, DropdownMenuSubTrigger, DropdownMenuTrigger, KitProvider, Select,
    Tooltip, TooltipContent, TooltipTrigger,
};
use pretty_assertions::assert_eq;

use crate::common::{count, render};

fn fruits() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
    ]
}

#[test]
fn closed_dropdown_hides_its_menu() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                DropdownMenu {
                    DropdownMenuTrigger { "Open" }
                    DropdownMenuContent {
                        DropdownMenuItem { "Profile" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-haspopup="menu""#));
    assert!(html.contains(r#"data-owner="dropdown-menu-1""#));
    assert!(html.contains("anchor-name: --anchor-dropdown-menu-1"));
    assert!(!html.contains(r#"role="menu""#));
    assert!(!html.contains("Profile"));
}

#[test]
fn open_dropdown_renders_label_items_and_alignment() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                DropdownMenu { default_open: true, align: DropdownAlign::End,
                    DropdownMenuTrigger { "Open" }
                    DropdownMenuContent { label: "My account",
                        DropdownMenuItem { "Profile" }
                        DropdownMenuItem { disabled: true, "Billing" }
                        DropdownMenuSub {
                            DropdownMenuSubTrigger { "Invite" }
                            DropdownMenuSubContent {
                                DropdownMenuItem { "Email" }
                            }
                        }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"role="menu""#));
    assert!(html.contains(r#"data-align="end""#));
    assert!(html.contains("position-anchor: --anchor-dropdown-menu-1"));
    assert!(html.contains("My account"));
    assert!(html.contains(r#"data-slot="dropdown-menu-separator""#));
    assert_eq!(count(&html, r#"role="menuitem""#), 3);
    assert!(html.contains(r#"aria-disabled="true""#));
    // Submenus stay hidden until hovered.
    assert!(html.contains("Invite"));
    assert!(!html.contains("Email"));
}

#[test]
fn select_shows_placeholder_until_a_value_is_chosen() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Select { options: fruits(), placeholder: "Pick a fruit", name: "fruit" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Pick a fruit"));
    assert!(html.contains(r#"data-placeholder="true""#));
    assert!(html.contains(r#"aria-haspopup="listbox""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"aria-controls="select-content-1""#));
    assert!(html.contains(r#"type="hidden""#));
    assert!(!html.contains(r#"role="listbox""#));
}

#[test]
fn select_with_default_value_shows_its_label() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Select { options: fruits(), default_value: "banana".to_string() }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Banana"));
    assert!(!html.contains("data-placeholder"));
    assert!(!html.contains(r#"type="hidden""#));
}

#[test]
fn select_error_marks_trigger_invalid() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Select { options: fruits(), error: "Pick one".to_string() }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-invalid="true""#));
    assert!(html.contains("Pick one"));
}

#[test]
fn tooltip_content_waits_for_hover() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Tooltip {
                    TooltipTrigger { "Hover me" }
                    TooltipContent { "Helpful text" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Hover me"));
    assert!(html.contains(r#"aria-describedby="tooltip-1""#));
    assert!(html.contains(r#"data-state="closed""#));
    assert!(!html.contains(r#"role="tooltip""#));
    assert!(!html.contains("Helpful text"));
}
