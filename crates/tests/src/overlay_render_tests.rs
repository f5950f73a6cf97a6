use dioxus::prelude::*;
use kit_state::OverlayOptions;
use kit_ui::{
    use_overlay, Collapsible, CollapsibleContent, CollapsibleTrigger, Dialog, DialogClose,
    DialogContent, DialogDescription, DialogTitle, DialogTrigger, KitProvider, Sheet,
    SheetContent, SheetSide, SheetTitle, SheetTrigger,
};
use pretty_assertions::assert_eq;

use crate::common::{count, render};

#[test]
fn closed_dialog_renders_only_its_trigger() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Dialog {
                    DialogTrigger { "Open" }
                    DialogContent {
                        DialogTitle { "Hidden title" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="dialog-trigger""#));
    assert!(html.contains(r#"aria-haspopup="dialog""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"aria-controls="dialog-1""#));
    assert!(!html.contains(r#"role="dialog""#));
    assert!(!html.contains("Hidden title"));
}

#[test]
fn open_dialog_renders_portal_with_owner_marker() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Dialog { default_open: true,
                    DialogTrigger { "Open" }
                    DialogContent {
                        DialogTitle { "Edit profile" }
                        DialogDescription { "Details" }
                        DialogClose { "Done" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="dialog-portal""#));
    assert!(html.contains(r#"data-slot="dialog-overlay""#));
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains(r#"id="dialog-1""#));
    assert!(html.contains(r#"data-owner="dialog-1""#));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains(r#"aria-label="Close""#));
    assert!(html.contains("Edit profile"));
    assert!(count(&html, r#"data-state="open""#) >= 3);
}

#[component]
fn ControlledDialog() -> Element {
    let confirm = use_overlay("confirm", OverlayOptions::modal(Default::default()), true);
    rsx! {
        Dialog { overlay: confirm,
            DialogContent { "Are you sure?" }
        }
    }
}

#[test]
fn externally_owned_overlay_drives_the_dialog() {
    fn app() -> Element {
        rsx! {
            KitProvider { ControlledDialog {} }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"id="confirm-1""#));
    assert!(html.contains("Are you sure?"));
}

#[test]
fn controlled_dialog_does_not_allocate_its_own_id() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                ControlledDialog {}
                Dialog {
                    DialogTrigger { "Next" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"id="confirm-1""#));
    assert!(html.contains(r#"aria-controls="dialog-2""#));
}

#[test]
fn open_dialog_is_rendered_after_the_page() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                main {
                    "Page body"
                    Dialog { default_open: true,
                        DialogContent {
                            DialogTitle { "Lifted" }
                        }
                    }
                    footer { "Page footer" }
                }
            }
        }
    }
    let html = render(app);
    let page_end = html.find("</main>").unwrap();
    let dialog = html.find(r#"role="dialog""#).unwrap();
    assert!(page_end < dialog, "dialog still nested in the page: {html}");
    assert!(html.find("Page footer").unwrap() < dialog);
    // Context is still reachable from the lifted content.
    assert!(html.contains("Lifted"));
}

#[test]
fn later_overlays_stack_after_earlier_ones() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Dialog { default_open: true,
                    DialogContent { "First" }
                }
                Sheet { default_open: true,
                    SheetContent { "Second" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.find(r#"id="dialog-1""#).unwrap() < html.find(r#"id="sheet-2""#).unwrap());
    assert_eq!(count(&html, r#"class="portal""#), 2);
}

#[test]
fn closed_overlays_leave_no_portal() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Dialog {
                    DialogContent { "Hidden" }
                }
                Sheet {
                    SheetContent { "Hidden too" }
                }
            }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, r#"class="portal""#), 0);
}

#[test]
fn dialog_without_provider_renders_in_place() {
    fn app() -> Element {
        rsx! {
            main {
                Dialog { default_open: true,
                    DialogContent { "Inline" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.find(r#"role="dialog""#).unwrap() < html.find("</main>").unwrap());
}

#[test]
fn sheet_content_reports_its_side() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Sheet { default_open: true,
                    SheetTrigger { "Filters" }
                    SheetContent { side: SheetSide::Left,
                        SheetTitle { "Filters" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="sheet-portal""#));
    assert!(html.contains(r#"data-side="left""#));
    assert!(html.contains(r#"id="sheet-1""#));
    assert!(html.contains("<h2"));
}

#[test]
fn sheet_defaults_to_the_right_edge() {
    assert_eq!(SheetSide::default(), SheetSide::Right);
    assert_eq!(SheetSide::default().as_str(), "right");
}

#[test]
fn collapsible_state_is_mirrored_on_every_part() {
    fn closed() -> Element {
        rsx! {
            KitProvider {
                Collapsible {
                    CollapsibleTrigger { "More" }
                    CollapsibleContent { "Details" }
                }
            }
        }
    }
    fn open() -> Element {
        rsx! {
            KitProvider {
                Collapsible { default_open: true,
                    CollapsibleTrigger { "More" }
                    CollapsibleContent { "Details" }
                }
            }
        }
    }
    let html = render(closed);
    assert_eq!(count(&html, r#"data-state="closed""#), 3);
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"aria-controls="collapsible-1""#));

    let html = render(open);
    assert_eq!(count(&html, r#"data-state="open""#), 3);
    assert!(html.contains(r#"id="collapsible-1""#));
}

#[test]
fn disabled_collapsible_disables_its_trigger() {
    fn app() -> Element {
        rsx! {
            KitProvider {
                Collapsible { disabled: true,
                    CollapsibleTrigger { "More" }
                    CollapsibleContent { "Details" }
                }
            }
        }
    }
    fn enabled() -> Element {
        rsx! {
            KitProvider {
                Collapsible {
                    CollapsibleTrigger { "More" }
                    CollapsibleContent { "Details" }
                }
            }
        }
    }
    let html = render(app);
    // Root and trigger both carry the flag; the button itself is disabled.
    assert_eq!(count(&html, r#"data-disabled="true""#), 2);
    assert!(html.contains(" disabled"));

    let html = render(enabled);
    assert!(!html.contains("data-disabled"));
}
