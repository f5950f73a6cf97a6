use dioxus::prelude::*;
use kit_state::HoverRegion;

use crate::{use_anchor_id, use_hover, use_kit, HoverHandle};

/// Side of the trigger the tooltip appears on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipAlign {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl TooltipAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TooltipAlign::Top => "top",
            TooltipAlign::Right => "right",
            TooltipAlign::Bottom => "bottom",
            TooltipAlign::Left => "left",
        }
    }
}

#[derive(Clone, Copy)]
struct TooltipContext {
    hover: HoverHandle,
    anchor: Signal<String>,
    id: Signal<String>,
    align: TooltipAlign,
}

#[component]
pub fn Tooltip(
    #[props(default)] align: TooltipAlign,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let kit = use_kit();
    let hover = use_hover(kit.config.tooltip_hide_delay());
    let anchor_id = use_anchor_id("tooltip");
    let anchor = use_signal(|| anchor_id.anchor_name());
    let id = use_signal(|| anchor_id.as_str());
    use_context_provider(|| TooltipContext {
        hover,
        anchor,
        id,
        align,
    });

    let base = vec![
        Attribute::new("class", "tooltip", None, false),
        Attribute::new("data-slot", "tooltip", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            "data-state": if hover.is_visible() { "open" } else { "closed" },
            ..merged,
            {children}
        }
    }
}

/// Wraps the element the tooltip describes. Hover and keyboard focus both
/// reveal it.
#[component]
pub fn TooltipTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let TooltipContext {
        hover, anchor, id, ..
    } = use_context();
    let base = vec![
        Attribute::new("class", "tooltip-trigger", None, false),
        Attribute::new("data-slot", "tooltip-trigger", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            style: "anchor-name: {anchor}",
            "aria-describedby": "{id}",
            onmouseenter: move |_| hover.enter(HoverRegion::Trigger),
            onmouseleave: move |_| hover.leave(HoverRegion::Trigger),
            onfocusin: move |_| hover.enter(HoverRegion::Trigger),
            onfocusout: move |_| hover.dismiss(),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TooltipContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let TooltipContext {
        hover,
        anchor,
        id,
        align,
    } = use_context();
    if !hover.is_visible() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "tooltip-content", None, false),
        Attribute::new("data-slot", "tooltip-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            id: "{id}",
            role: "tooltip",
            style: "position-anchor: {anchor}",
            "data-align": align.as_str(),
            onmouseenter: move |_| hover.enter(HoverRegion::Popover),
            onmouseleave: move |_| hover.leave(HoverRegion::Popover),
            ..merged,
            {children}
        }
    }
}
