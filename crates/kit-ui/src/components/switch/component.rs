use dioxus::prelude::*;

use crate::use_anchor_id;

/// On/off toggle backed by a native checkbox so it submits with its form.
///
/// `name` binds the control to a form field; without one the generated
/// instance id is used for both `id` and the label's `for`.
#[component]
pub fn Switch(
    #[props(default = false)] default_checked: bool,
    #[props(default)] name: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_checked_change: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let anchor = use_anchor_id("switch");
    let mut checked = use_signal(|| default_checked);
    let id = if name.is_empty() { anchor.as_str() } else { name.clone() };
    let state = if checked() { "checked" } else { "unchecked" };

    let base = vec![
        Attribute::new("class", "switch", None, false),
        Attribute::new("data-slot", "switch", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            input {
                id: "{id}",
                class: "switch-primitive-checkbox",
                r#type: "checkbox",
                role: "switch",
                name: (!name.is_empty()).then_some(name.clone()),
                checked: checked(),
                disabled: disabled,
                "aria-checked": if checked() { "true" } else { "false" },
                "data-state": state,
                onclick: move |_| {
                    let next = !checked();
                    checked.set(next);
                    on_checked_change.call(next);
                },
            }
            label {
                class: "switch-thumb",
                r#for: "{id}",
                "data-state": state,
            }
        }
    }
}
