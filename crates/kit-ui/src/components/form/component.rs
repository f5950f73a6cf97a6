use std::collections::BTreeMap;

use dioxus::prelude::*;
use kit_state::{FormState, SelectOption, SubmitOutcome};

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::{Input, PasswordInput};
use crate::components::label::Label;
use crate::components::select::Select;
use crate::use_anchor_id;

/// Handle to a [`FormState`] shared by a [`Form`] and its fields.
#[derive(Clone, Copy, PartialEq)]
pub struct FormHandle {
    state: Signal<FormState>,
}

impl FormHandle {
    pub fn has_field(&self, name: &str) -> bool {
        self.state.read().field_state(name).is_some()
    }

    pub fn value(&self, name: &str) -> String {
        self.state
            .read()
            .field_state(name)
            .map(|f| f.value().to_string())
            .unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state
            .read()
            .field_state(name)
            .and_then(|f| f.error().map(str::to_string))
    }

    pub fn set_value(mut self, name: &str, value: impl Into<String>) {
        if let Err(err) = self.state.write().set_value(name, value) {
            tracing::warn!(%err, "form value dropped");
        }
    }

    /// Re-validate one field. Returns `true` when it passed.
    pub fn validate_field(mut self, name: &str) -> bool {
        match self.state.write().validate_field(name) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::warn!(%err, "form validation skipped");
                false
            }
        }
    }

    /// Validate everything and, if nothing failed, call `on_submit` with the
    /// collected values once the new field state is stored.
    pub fn submit(mut self, on_submit: impl FnOnce(BTreeMap<String, String>)) -> SubmitOutcome {
        let mut next = self.state.peek().clone();
        let mut collected = None;
        let outcome = next.submit(|values| collected = Some(values));
        self.state.set(next);
        if let Some(values) = collected {
            on_submit(values);
        }
        outcome
    }

    pub fn reset(mut self) {
        self.state.write().reset();
    }
}

/// Create the form model once for this component.
pub fn use_form(init: impl FnOnce() -> FormState) -> FormHandle {
    let state = use_signal(init);
    FormHandle { state }
}

#[derive(Clone, PartialEq)]
struct FieldContext {
    name: String,
    id: String,
}

fn use_field() -> (FormHandle, FieldContext) {
    (use_context::<FormHandle>(), use_context::<FieldContext>())
}

/// `<form>` that validates every field on submit. `on_submit` receives the
/// `{name: value}` map only when all fields pass.
#[component]
pub fn Form(
    form: FormHandle,
    #[props(default)] on_submit: EventHandler<BTreeMap<String, String>>,
    #[props(default)] submit_label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_context_provider(|| form);

    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("data-slot", "form", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                form.submit(|values| on_submit.call(values));
            },
            ..merged,
            {children}
            if let Some(label) = submit_label {
                Button { button_type: "submit", variant: ButtonVariant::Default, "{label}" }
            }
        }
    }
}

/// Binds its children to the field called `name`. An unknown name is
/// logged and nothing is rendered.
#[component]
pub fn FormField(
    name: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let form = use_context::<FormHandle>();
    let anchor = use_anchor_id("form-field");
    let context = FieldContext {
        name: name.clone(),
        id: anchor.as_str(),
    };
    use_context_provider(|| context);

    if !form.has_field(&name) {
        tracing::warn!(field = %name, "form field has no matching control");
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "form-item", None, false),
        Attribute::new("data-slot", "form-item", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            "data-invalid": form.error(&name).is_some().then_some("true"),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn FormLabel(children: Element) -> Element {
    let (form, field) = use_field();
    let invalid = form.error(&field.name).is_some();

    rsx! {
        Label {
            html_for: field.id.clone(),
            class: if invalid { "form-label form-label-error" } else { "form-label" },
            {children}
        }
    }
}

/// Text input bound to the enclosing field. Validates on blur.
#[component]
pub fn FormInput(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    let (form, field) = use_field();
    let FieldContext { name, id } = field;
    let on_input_name = name.clone();
    let on_blur_name = name.clone();

    rsx! {
        Input {
            id: "{id}",
            name: name.clone(),
            input_type,
            placeholder,
            value: form.value(&name),
            invalid: form.error(&name).is_some(),
            on_input: move |evt: FormEvent| form.set_value(&on_input_name, evt.value()),
            on_blur: move |_| {
                form.validate_field(&on_blur_name);
            },
        }
    }
}

#[component]
pub fn FormPasswordInput(
    #[props(default = "Password".to_string())] placeholder: String,
) -> Element {
    let (form, field) = use_field();
    let FieldContext { name, id } = field;
    let on_input_name = name.clone();
    let on_blur_name = name.clone();

    rsx! {
        PasswordInput {
            id: "{id}",
            name: name.clone(),
            placeholder,
            value: form.value(&name),
            invalid: form.error(&name).is_some(),
            on_input: move |evt: FormEvent| form.set_value(&on_input_name, evt.value()),
            on_blur: move |_| {
                form.validate_field(&on_blur_name);
            },
        }
    }
}

/// Select bound to the enclosing field. Choosing re-validates it.
#[component]
pub fn FormSelect(
    options: Vec<SelectOption>,
    #[props(default = "Select an option".to_string())] placeholder: String,
    #[props(default = "100%".to_string())] width: String,
) -> Element {
    let (form, field) = use_field();
    let FieldContext { name, id } = field;
    let current = form.value(&name);
    let changed_name = name.clone();

    rsx! {
        Select {
            id: "{id}",
            options,
            placeholder,
            width,
            name: name.clone(),
            default_value: (!current.is_empty()).then_some(current),
            error: form.error(&name),
            on_change: move |value: String| {
                form.set_value(&changed_name, value);
                form.validate_field(&changed_name);
            },
        }
    }
}

#[component]
pub fn FormDescription(children: Element) -> Element {
    let (_, field) = use_field();
    let id = field.id;

    rsx! {
        p {
            id: "{id}-description",
            class: "form-description",
            "data-slot": "form-description",
            {children}
        }
    }
}

/// The field's current error, or nothing while it is valid.
#[component]
pub fn FormMessage() -> Element {
    let (form, field) = use_field();
    let Some(message) = form.error(&field.name) else {
        return rsx! {};
    };
    let id = field.id;

    rsx! {
        p {
            id: "{id}-message",
            class: "form-message",
            "data-slot": "form-message",
            role: "alert",
            "{message}"
        }
    }
}
