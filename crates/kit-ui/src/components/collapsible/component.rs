use dioxus::prelude::*;
use kit_state::OverlayOptions;

use crate::{use_overlay, OverlayHandle};

#[derive(Clone, Copy)]
struct CollapsibleContext {
    overlay: OverlayHandle,
    disabled: Signal<bool>,
}

/// Disclosure region. No escape or outside-click handling; only the
/// trigger changes it, and not while the root is `disabled`.
#[component]
pub fn Collapsible(
    #[props(default = false)] default_open: bool,
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_overlay("collapsible", OverlayOptions::inline(), default_open);
    let mut root_disabled = use_signal(|| disabled);
    use_effect(use_reactive(&disabled, move |disabled| {
        if *root_disabled.peek() != disabled {
            root_disabled.set(disabled);
        }
    }));
    use_context_provider(|| CollapsibleContext {
        overlay,
        disabled: root_disabled,
    });

    let base = vec![
        Attribute::new("class", "collapsible", None, false),
        Attribute::new("data-slot", "collapsible", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-state": overlay.data_state(),
            "data-disabled": disabled.then_some("true"),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CollapsibleTrigger(
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let context = use_context::<CollapsibleContext>();
    let overlay = context.overlay;
    let disabled = disabled || *context.disabled.read();
    let base = vec![
        Attribute::new("class", "collapsible-trigger", None, false),
        Attribute::new("data-slot", "collapsible-trigger", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            disabled,
            "aria-expanded": if overlay.is_open() { "true" } else { "false" },
            "aria-controls": overlay.id().as_str(),
            "data-state": overlay.data_state(),
            "data-disabled": disabled.then_some("true"),
            onclick: move |_| {
                if disabled {
                    return;
                }
                overlay.toggle();
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CollapsibleContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let overlay = use_context::<CollapsibleContext>().overlay;
    let id = overlay.id().as_str();
    let base = vec![
        Attribute::new("class", "collapsible-content", None, false),
        Attribute::new("data-slot", "collapsible-content", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            id: "{id}",
            hidden: !overlay.is_open(),
            "data-state": overlay.data_state(),
            ..merged,
            {children}
        }
    }
}
