use dioxus::prelude::*;
use kit_state::{OverlayOptions, SelectChange, SelectOption, SelectState};

use crate::icons::{Icon, IconName};
use crate::use_overlay;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectSize {
    Sm,
    #[default]
    Default,
}

impl SelectSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectSize::Sm => "sm",
            SelectSize::Default => "default",
        }
    }
}

/// Single-choice listbox. Choosing an option closes the list immediately.
///
/// `error` marks the trigger invalid until a new value is chosen or the
/// caller clears it.
#[component]
pub fn Select(
    options: Vec<SelectOption>,
    #[props(default = "Select an option".to_string())] placeholder: String,
    #[props(default)] size: SelectSize,
    #[props(default = "8rem".to_string())] width: String,
    #[props(default)] default_value: Option<String>,
    #[props(default)] name: String,
    #[props(default)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] on_change: EventHandler<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let overlay = use_overlay("select-content", OverlayOptions::popover(), false);
    let mut state = use_signal(|| {
        let mut state = SelectState::new(options.clone());
        if let Some(value) = default_value.clone() {
            state = state.with_value(value);
        }
        if let Some(message) = error.clone() {
            state.set_error(message);
        }
        state
    });

    use_effect(move || {
        let open = overlay.is_open();
        let mut next = state.peek().clone();
        let changed = if open { next.open() } else { next.close() };
        if changed {
            state.set(next);
        }
    });

    use_effect(use_reactive(&error, move |error| {
        let mut next = state.peek().clone();
        match error {
            Some(message) => next.set_error(message),
            None => next.clear_error(),
        }
        if next != *state.peek() {
            state.set(next);
        }
    }));

    let id = overlay.id().as_str();
    let anchor = overlay.id().anchor_name();
    let current = state.read().clone();
    let label = current
        .selected_label()
        .map(str::to_string)
        .unwrap_or_else(|| placeholder.clone());

    let base = vec![
        Attribute::new("class", "select-trigger", None, false),
        Attribute::new("data-slot", "select-trigger", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let mut choose = move |value: String| {
        let mut next = state.peek().clone();
        match next.choose(&value) {
            Ok(change) => {
                state.set(next);
                overlay.close();
                if let SelectChange::Changed(value) = change {
                    on_change.call(value);
                }
            }
            Err(err) => tracing::warn!(%err, "select ignored choice"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "select",
            "data-slot": "select",
            "data-owner": "{id}",
            style: "width: {width}",
            if !name.is_empty() {
                input {
                    r#type: "hidden",
                    name: "{name}",
                    value: current.value().unwrap_or_default(),
                }
            }
            button {
                r#type: "button",
                role: "combobox",
                disabled,
                style: "anchor-name: {anchor}",
                "aria-haspopup": "listbox",
                "aria-expanded": if current.is_expanded() { "true" } else { "false" },
                "aria-controls": "{id}",
                "aria-invalid": current.is_invalid().then_some("true"),
                "data-size": size.as_str(),
                "data-state": current.data_state(),
                "data-placeholder": current.value().is_none().then_some("true"),
                onclick: move |_| {
                    overlay.toggle();
                },
                ..merged,
                span { class: "select-value", "data-slot": "select-value", "{label}" }
                Icon { name: IconName::ChevronDown, class: "select-chevron" }
            }
            if current.is_expanded() {
                ul {
                    id: "{id}",
                    class: "select-content",
                    "data-slot": "select-content",
                    role: "listbox",
                    style: "position-anchor: {anchor}; min-width: {width}",
                    "data-state": current.data_state(),
                    for option in current.options().iter() {
                        SelectItem {
                            key: "{option.value}",
                            value: option.value.clone(),
                            label: option.label.clone(),
                            selected: current.is_selected(&option.value),
                            on_choose: move |value| choose(value),
                        }
                    }
                }
            }
            if let Some(message) = current.error() {
                p { class: "select-error", "data-slot": "select-error", "{message}" }
            }
        }
    }
}

#[component]
fn SelectItem(
    value: String,
    label: String,
    selected: bool,
    on_choose: EventHandler<String>,
) -> Element {
    let chosen = value.clone();
    rsx! {
        li {
            class: "select-item",
            "data-slot": "select-item",
            role: "option",
            tabindex: "0",
            "aria-selected": if selected { "true" } else { "false" },
            "data-state": if selected { "checked" } else { "unchecked" },
            onclick: move |_| on_choose.call(value.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    on_choose.call(chosen.clone());
                }
            },
            span { class: "select-item-text", "{label}" }
            if selected {
                span { class: "select-item-indicator",
                    Icon { name: IconName::Check }
                }
            }
        }
    }
}
