use dioxus::prelude::*;
use kit_state::OverlayOptions;

use crate::components::button::{button_attributes, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconName};
use crate::{use_kit, use_overlay, OverlayHandle, Portal};

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct SheetContext {
    overlay: OverlayHandle,
}

pub fn use_sheet() -> OverlayHandle {
    use_context::<SheetContext>().overlay
}

/// Sliding side panel. Same lifecycle as a dialog.
#[component]
pub fn Sheet(
    #[props(default = false)] default_open: bool,
    #[props(default)] overlay: Option<OverlayHandle>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(overlay) = overlay {
            SheetScope { overlay, {children} }
        } else {
            OwnedSheet { default_open, {children} }
        }
    }
}

#[component]
fn OwnedSheet(default_open: bool, children: Element) -> Element {
    let kit = use_kit();
    let overlay = use_overlay(
        "sheet",
        OverlayOptions::modal(kit.config.portal_removal_delay()),
        default_open,
    );

    rsx! {
        SheetScope { overlay, {children} }
    }
}

#[component]
fn SheetScope(overlay: OverlayHandle, children: Element) -> Element {
    use_context_provider(|| SheetContext { overlay });

    rsx! {
        {children}
    }
}

#[component]
pub fn SheetTrigger(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_sheet();
    let base = button_attributes("sheet-trigger", variant, size);
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

#[component]
pub fn SheetContent(
    #[props(default)] side: SheetSide,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_sheet();
    let id = overlay.id().as_str();
    let base = vec![
        Attribute::new("class", "sheet-content", None, false),
        Attribute::new("data-slot", "sheet-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        Portal {
            id: id.clone(),
            mounted: overlay.is_mounted(),
            state: overlay.data_state(),
            slot: "sheet-portal",
            on_exit: move |_| {
                overlay.transition_end();
            },
            SheetScope { overlay,
                div {
                    class: "sheet-overlay",
                    "data-slot": "sheet-overlay",
                    "data-state": overlay.data_state(),
                    onclick: move |_| {
                        overlay.close();
                    },
                }
                div {
                    id: "{id}",
                    role: "dialog",
                    "aria-modal": "true",
                    "data-side": side.as_str(),
                    "data-state": overlay.data_state(),
                    "data-owner": "{id}",
                    ..merged,
                    button {
                        class: "sheet-primitive-close",
                        "data-slot": "sheet-close",
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

#[component]
pub fn SheetClose(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_sheet();
    let base = button_attributes("sheet-close", variant, size);
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
pub fn SheetHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sheet-header", None, false),
        Attribute::new("data-slot", "sheet-header", None, false),
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
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sheet-footer", None, false),
        Attribute::new("data-slot", "sheet-footer", None, false),
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
pub fn SheetTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sheet-title", None, false),
        Attribute::new("data-slot", "sheet-title", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sheet-description", None, false),
        Attribute::new("data-slot", "sheet-description", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}
