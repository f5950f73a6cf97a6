use dioxus::prelude::*;

use crate::icons::{Icon, IconName};

/// At least eight characters with one uppercase letter and one digit.
pub const PASSWORD_PATTERN: &str = r"(?=.*[A-Z])(?=.*\d).{8,}";

/// Single-line text input. Marked `aria-invalid` while `invalid` is set.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] name: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new("data-slot", "input", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            name: (!name.is_empty()).then_some(name),
            placeholder: placeholder,
            required: required,
            disabled: disabled,
            "aria-invalid": invalid.then_some("true"),
            oninput: move |evt| on_input.call(evt),
            onblur: move |evt| on_blur.call(evt),
            ..merged,
        }
    }
}

/// Password input enforcing [`PASSWORD_PATTERN`], with a reveal toggle.
#[component]
pub fn PasswordInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default = "Password".to_string())] placeholder: String,
    #[props(default)] name: String,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut revealed = use_signal(|| false);
    let input_type = if revealed() { "text" } else { "password" };

    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new("data-slot", "password-input", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "password-input", "data-slot": "password-input-wrapper",
            input {
                r#type: input_type,
                value: value,
                name: (!name.is_empty()).then_some(name),
                placeholder: placeholder,
                required: true,
                pattern: PASSWORD_PATTERN,
                "aria-invalid": invalid.then_some("true"),
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| on_blur.call(evt),
                ..merged,
            }
            button {
                class: "password-input-toggle",
                r#type: "button",
                "aria-label": if revealed() { "Hide password" } else { "Show password" },
                "aria-pressed": if revealed() { "true" } else { "false" },
                onclick: move |_| revealed.toggle(),
                if revealed() {
                    Icon { name: IconName::EyeOff }
                } else {
                    Icon { name: IconName::Eye }
                }
            }
        }
    }
}
