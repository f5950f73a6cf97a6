use dioxus::prelude::*;
use kit_ui::{
    use_overlay, Button, ButtonVariant, Dialog, DialogClose, DialogContent, DialogDescription,
    DialogFooter, DialogHeader, DialogTitle, DialogTrigger, DropdownAlign, DropdownItemVariant,
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator, DropdownMenuSub,
    DropdownMenuSubContent, DropdownMenuSubTrigger, DropdownMenuTrigger, Input, Label, Sheet,
    SheetClose, SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetSide, SheetTitle,
    SheetTrigger,
};
use kit_ui::kit_state::OverlayOptions;
use kit_ui::use_kit;

const SIDES: [SheetSide; 4] = [
    SheetSide::Top,
    SheetSide::Right,
    SheetSide::Bottom,
    SheetSide::Left,
];

#[component]
pub fn Overlays() -> Element {
    let mut last_action = use_signal(|| "none".to_string());
    // Driven from outside the dialog to show controlled usage.
    let kit = use_kit();
    let confirm = use_overlay(
        "confirm",
        OverlayOptions::modal(kit.config.portal_removal_delay()),
        false,
    );

    rsx! {
        section { class: "gallery-section",
            h2 { "Dialog" }
            div { class: "gallery-row",
                Dialog {
                    DialogTrigger { variant: ButtonVariant::Outline, "Edit profile" }
                    DialogContent {
                        DialogHeader {
                            DialogTitle { "Edit profile" }
                            DialogDescription { "Changes are kept until you close the page." }
                        }
                        div { class: "gallery-row",
                            Label { html_for: "profile-name", "Name" }
                            Input { id: "profile-name", placeholder: "Ada Lovelace" }
                        }
                        DialogFooter {
                            DialogClose { variant: ButtonVariant::Outline, "Cancel" }
                            DialogClose { "Save" }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| {
                        confirm.open();
                    },
                    "Delete account"
                }
                Dialog { overlay: confirm,
                    DialogContent {
                        DialogHeader {
                            DialogTitle { "Are you sure?" }
                            DialogDescription { "This cannot be undone." }
                        }
                        DialogFooter {
                            DialogClose { variant: ButtonVariant::Outline, "Keep it" }
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: move |_| {
                                    last_action.set("deleted".to_string());
                                    confirm.close();
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }

        section { class: "gallery-section",
            h2 { "Sheet" }
            div { class: "gallery-row",
                for (side, name) in SIDES.iter().map(|s| (*s, s.as_str())) {
                    Sheet { key: "{name}",
                        SheetTrigger { variant: ButtonVariant::Outline, "{name}" }
                        SheetContent { side,
                            SheetHeader {
                                SheetTitle { "Filters" }
                                SheetDescription { "Opened from the {name} edge." }
                            }
                            SheetFooter {
                                SheetClose { "Done" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "gallery-section",
            h2 { "Dropdown menu" }
            div { class: "gallery-row",
                DropdownMenu { align: DropdownAlign::Start,
                    DropdownMenuTrigger { "Open menu" }
                    DropdownMenuContent { label: "My account",
                        DropdownMenuItem {
                            onclick: move |_| last_action.set("profile".to_string()),
                            "Profile"
                        }
                        DropdownMenuItem {
                            onclick: move |_| last_action.set("settings".to_string()),
                            "Settings"
                        }
                        DropdownMenuSub {
                            DropdownMenuSubTrigger { "Invite users" }
                            DropdownMenuSubContent {
                                DropdownMenuItem {
                                    onclick: move |_| last_action.set("invite by email".to_string()),
                                    "Email"
                                }
                                DropdownMenuItem {
                                    onclick: move |_| last_action.set("invite by link".to_string()),
                                    "Copy link"
                                }
                            }
                        }
                        DropdownMenuItem { disabled: true, "Billing" }
                        DropdownMenuSeparator {}
                        DropdownMenuItem {
                            variant: DropdownItemVariant::Destructive,
                            onclick: move |_| last_action.set("log out".to_string()),
                            "Log out"
                        }
                    }
                }
                span { "Last action: {last_action}" }
            }
        }
    }
}
