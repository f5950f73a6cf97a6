use dioxus::prelude::*;
use kit_state::{HoverRegion, OverlayOptions};

use crate::components::button::{button_attributes, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconName};
use crate::{use_anchor_id, use_hover, use_kit, use_overlay, HoverHandle, OverlayHandle};

/// Horizontal alignment of the menu against its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DropdownAlign {
    #[default]
    Start,
    Center,
    End,
}

impl DropdownAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownAlign::Start => "start",
            DropdownAlign::Center => "center",
            DropdownAlign::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DropdownItemVariant {
    #[default]
    Default,
    Destructive,
}

impl DropdownItemVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownItemVariant::Default => "default",
            DropdownItemVariant::Destructive => "destructive",
        }
    }
}

#[derive(Clone, Copy)]
struct MenuContext {
    overlay: OverlayHandle,
    align: DropdownAlign,
}

#[derive(Clone, Copy)]
struct SubMenuContext {
    hover: HoverHandle,
    anchor: Signal<String>,
}

/// Handle of the enclosing [`DropdownMenu`].
pub fn use_dropdown_menu() -> OverlayHandle {
    use_context::<MenuContext>().overlay
}

/// Menu anchored to its trigger. Escape and clicks outside the menu close it.
#[component]
pub fn DropdownMenu(
    #[props(default = false)] default_open: bool,
    #[props(default)] align: DropdownAlign,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_overlay("dropdown-menu", OverlayOptions::popover(), default_open);
    use_context_provider(|| MenuContext { overlay, align });
    let owner = overlay.id().as_str();

    let base = vec![
        Attribute::new("class", "dropdown-menu", None, false),
        Attribute::new("data-slot", "dropdown-menu", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-owner": "{owner}",
            "data-state": overlay.data_state(),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuTrigger(
    #[props(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_dropdown_menu();
    let anchor = overlay.id().anchor_name();
    let base = button_attributes("dropdown-menu-trigger", variant, size);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            style: "anchor-name: {anchor}",
            "aria-haspopup": "menu",
            "aria-expanded": if overlay.is_open() { "true" } else { "false" },
            "aria-controls": overlay.id().as_str(),
            "data-state": overlay.data_state(),
            onclick: move |_| {
                overlay.toggle();
            },
            ..merged,
            {children}
        }
    }
}

/// The menu body. `label` adds a heading and separator above the items.
#[component]
pub fn DropdownMenuContent(
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let MenuContext { overlay, align } = use_context();
    if !overlay.is_open() {
        return rsx! {};
    }

    let id = overlay.id().as_str();
    let anchor = overlay.id().anchor_name();
    let base = vec![
        Attribute::new("class", "dropdown-menu-content", None, false),
        Attribute::new("data-slot", "dropdown-menu-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            id: "{id}",
            role: "menu",
            style: "position-anchor: {anchor}",
            "data-align": align.as_str(),
            "data-state": overlay.data_state(),
            ..merged,
            if let Some(label) = label {
                DropdownMenuLabel { "{label}" }
                DropdownMenuSeparator {}
            }
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "dropdown-menu-label", None, false),
        Attribute::new("data-slot", "dropdown-menu-label", None, false),
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
pub fn DropdownMenuSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "dropdown-menu-separator", None, false),
        Attribute::new("data-slot", "dropdown-menu-separator", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "separator",
            ..merged,
        }
    }
}

/// Activating an item runs `onclick` and closes the whole menu, including
/// any open submenu.
#[component]
pub fn DropdownMenuItem(
    #[props(default)] variant: DropdownItemVariant,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_dropdown_menu();
    let sub = try_consume_context::<SubMenuContext>();
    let base = vec![
        Attribute::new("class", "dropdown-menu-item", None, false),
        Attribute::new("data-slot", "dropdown-menu-item", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "menuitem",
            tabindex: if disabled { "-1" } else { "0" },
            "aria-disabled": disabled.then_some("true"),
            "data-variant": variant.as_str(),
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
                if let Some(sub) = sub {
                    sub.hover.dismiss();
                }
                overlay.close();
            },
            ..merged,
            {children}
        }
    }
}

/// Nested menu revealed on hover. Moving between the trigger and the
/// submenu within the hide delay keeps it open.
#[component]
pub fn DropdownMenuSub(children: Element) -> Element {
    let kit = use_kit();
    let hover = use_hover(kit.config.submenu_hide_delay());
    let id = use_anchor_id("dropdown-submenu");
    let anchor = use_signal(|| id.anchor_name());
    use_context_provider(|| SubMenuContext { hover, anchor });

    rsx! {
        div {
            class: "dropdown-menu-sub",
            "data-slot": "dropdown-menu-sub",
            "data-state": if hover.is_visible() { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuSubTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let SubMenuContext { hover, anchor } = use_context();
    let base = vec![
        Attribute::new("class", "dropdown-menu-sub-trigger", None, false),
        Attribute::new("data-slot", "dropdown-menu-sub-trigger", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "menuitem",
            tabindex: "0",
            "aria-haspopup": "menu",
            "aria-expanded": if hover.is_visible() { "true" } else { "false" },
            style: "anchor-name: {anchor}",
            onmouseenter: move |_| hover.enter(HoverRegion::Trigger),
            onmouseleave: move |_| hover.leave(HoverRegion::Trigger),
            ..merged,
            {children}
            Icon { name: IconName::ChevronRight, class: "dropdown-menu-sub-chevron" }
        }
    }
}

#[component]
pub fn DropdownMenuSubContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let SubMenuContext { hover, anchor } = use_context();
    if !hover.is_visible() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "dropdown-menu-sub-content", None, false),
        Attribute::new("data-slot", "dropdown-menu-sub-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "menu",
            style: "position-anchor: {anchor}",
            onmouseenter: move |_| hover.enter(HoverRegion::Popover),
            onmouseleave: move |_| hover.leave(HoverRegion::Popover),
            ..merged,
            {children}
        }
    }
}
