use dioxus::prelude::*;
use kit_state::OverlayOptions;

use crate::components::button::{button_attributes, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconName};
use crate::{use_kit, use_overlay, OverlayHandle, Portal};

#[derive(Clone, Copy, PartialEq)]
struct DialogContext {
    overlay: OverlayHandle,
}

/// Handle of the enclosing [`Dialog`], for closing it from custom content.
pub fn use_dialog() -> OverlayHandle {
    use_context::<DialogContext>().overlay
}

/// Modal dialog. Holds the open state shared by its trigger and content.
///
/// Pass `overlay` to control it from outside; otherwise it owns its state.
#[component]
pub fn Dialog(
    #[props(default = false)] default_open: bool,
    #[props(default)] overlay: Option<OverlayHandle>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(overlay) = overlay {
            DialogScope { overlay, {children} }
        } else {
            OwnedDialog { default_open, {children} }
        }
    }
}

#[component]
fn OwnedDialog(default_open: bool, children: Element) -> Element {
    let kit = use_kit();
    let overlay = use_overlay(
        "dialog",
        OverlayOptions::modal(kit.config.portal_removal_delay()),
        default_open,
    );

    rsx! {
        DialogScope { overlay, {children} }
    }
}

/// Provides the dialog context. Also wraps portalled content, which mounts
/// outside the [`Dialog`].
#[component]
fn DialogScope(overlay: OverlayHandle, children: Element) -> Element {
    use_context_provider(|| DialogContext { overlay });

    rsx! {
        {children}
    }
}

#[component]
pub fn DialogTrigger(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_dialog();
    let base = button_attributes("dialog-trigger", variant, size);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-haspopup": "dialog",
            "aria-expanded": if overlay.is_open() { "true" } else { "false" },
            "aria-controls": overlay.id().as_str(),
            "data-state": overlay.data_state(),
            onclick: move |_| {
                overlay.open();
            },
            ..merged,
            {children}
        }
    }
}

/// Dialog panel with a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn DialogContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_dialog();
    let id = overlay.id().as_str();
    let base = vec![
        Attribute::new("class", "dialog-content", None, false),
        Attribute::new("data-slot", "dialog-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        Portal {
            id: id.clone(),
            mounted: overlay.is_mounted(),
            state: overlay.data_state(),
            slot: "dialog-portal",
            on_exit: move |_| {
                overlay.transition_end();
            },
            DialogScope { overlay,
                div {
                    class: "dialog-overlay",
                    "data-slot": "dialog-overlay",
                    "data-state": overlay.data_state(),
                    onclick: move |_| {
                        overlay.close();
                    },
                }
                div {
                    id: "{id}",
                    role: "dialog",
                    "aria-modal": "true",
                    "data-state": overlay.data_state(),
                    "data-owner": "{id}",
                    ..merged,
                    button {
                        class: "dialog-primitive-close",
                        "data-slot": "dialog-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| {
                            overlay.close();
                        },
                        Icon { name: IconName::Close }
                    }
                    {children}
                }
            }
        }
    }
}

/// Wraps children in a button that closes the dialog.
#[component]
pub fn DialogClose(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_dialog();
    let base = button_attributes("dialog-close", variant, size);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |_| {
                overlay.close();
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DialogHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "dialog-header", None, false),
        Attribute::new("data-slot", "dialog-header", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DialogFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "dialog-footer", None, false),
        Attribute::new("data-slot", "dialog-footer", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "dialog-title", None, false),
        Attribute::new("data-slot", "dialog-title", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DialogDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "dialog-description", None, false),
        Attribute::new("data-slot", "dialog-description", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}
