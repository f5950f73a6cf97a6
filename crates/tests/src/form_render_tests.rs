use dioxus::prelude::*;
use kit_state::{validators, FormState};
use kit_ui::{
    use_form, Form, FormDescription, FormField, FormInput, FormLabel, FormMessage,
    FormPasswordInput, KitProvider,
};

use crate::common::render;

fn contact_form() -> FormState {
    FormState::new()
        .field("name", Some(validators::required("Name is required")))
        .field("password", Some(validators::password_strength("Too weak")))
}

#[component]
fn ContactForm(validated: bool) -> Element {
    let form = use_form(move || {
        let mut state = contact_form();
        if validated {
            state.validate();
        }
        state
    });

    rsx! {
        Form { form, submit_label: "Send",
            FormField { name: "name",
                FormLabel { "Name" }
                FormInput { placeholder: "Your name" }
                FormDescription { "As it appears on your ID." }
                FormMessage {}
            }
            FormField { name: "password",
                FormLabel { "Password" }
                FormPasswordInput {}
                FormMessage {}
            }
            FormField { name: "nickname",
                FormLabel { "Nickname" }
                FormInput {}
            }
        }
    }
}

#[test]
fn fresh_form_renders_bound_controls_without_errors() {
    fn app() -> Element {
        rsx! {
            KitProvider { ContactForm { validated: false } }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-slot="form""#));
    assert!(html.contains(r#"novalidate"#));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains(r#"name="password""#));
    assert!(html.contains(r#"for="form-field-1""#));
    assert!(html.contains(r#"id="form-field-1""#));
    assert!(html.contains(r#"id="form-field-1-description""#));
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains("Send"));
    assert!(!html.contains("aria-invalid"));
    assert!(!html.contains(r#"data-slot="form-message""#));
}

#[test]
fn unknown_field_renders_nothing() {
    fn app() -> Element {
        rsx! {
            KitProvider { ContactForm { validated: false } }
        }
    }
    let html = render(app);
    assert!(!html.contains("Nickname"));
}

#[test]
fn validation_errors_surface_in_place() {
    fn app() -> Element {
        rsx! {
            KitProvider { ContactForm { validated: true } }
        }
    }
    let html = render(app);
    assert!(html.contains("Name is required"));
    assert!(html.contains("Too weak"));
    assert!(html.contains(r#"aria-invalid="true""#));
    assert!(html.contains(r#"data-invalid="true""#));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("form-label-error"));
}
