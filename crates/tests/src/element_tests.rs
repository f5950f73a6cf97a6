use dioxus::prelude::*;
use kit_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, KitProvider, Label, PasswordInput, Switch,
};
use pretty_assertions::assert_eq;

use crate::common::{count, render};

#[test]
fn button_carries_slot_variant_and_size() {
    fn app() -> Element {
        rsx! {
            Button { "Save" }
            Button { variant: ButtonVariant::Destructive, size: ButtonSize::Sm, "Delete" }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, r#"data-slot="button""#), 2);
    assert!(html.contains(r#"data-variant="default""#));
    assert!(html.contains(r#"data-variant="destructive""#));
    assert!(html.contains(r#"data-size="sm""#));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains("Delete"));
}

#[test]
fn submit_button_keeps_its_type() {
    fn app() -> Element {
        rsx! { Button { button_type: "submit", "Go" } }
    }
    assert!(render(app).contains(r#"type="submit""#));
}

#[test]
fn card_sections_are_slotted() {
    fn app() -> Element {
        rsx! {
            Card {
                CardHeader {
                    CardTitle { "Title" }
                    CardDescription { "Description" }
                }
                CardContent { "Body" }
                CardFooter { "Footer" }
            }
        }
    }
    let html = render(app);
    for slot in [
        "card",
        "card-header",
        "card-title",
        "card-description",
        "card-content",
        "card-footer",
    ] {
        assert!(
            html.contains(&format!(r#"data-slot="{slot}""#)),
            "missing {slot} in {html}"
        );
    }
    assert!(html.contains("<h3"));
}

#[test]
fn input_is_marked_invalid_only_when_errored() {
    fn valid() -> Element {
        rsx! { Input { name: "email", placeholder: "Email" } }
    }
    fn invalid() -> Element {
        rsx! { Input { name: "email", invalid: true } }
    }
    let html = render(valid);
    assert!(html.contains(r#"name="email""#));
    assert!(!html.contains("aria-invalid"));
    assert!(render(invalid).contains(r#"aria-invalid="true""#));
}

#[test]
fn password_input_enforces_pattern_and_starts_hidden() {
    fn app() -> Element {
        rsx! { PasswordInput { name: "password" } }
    }
    let html = render(app);
    assert!(html.contains(r#"type="password""#));
    assert!(html.contains("pattern="));
    assert!(html.contains(r#"aria-label="Show password""#));
    assert!(html.contains(r#"aria-pressed="false""#));
}

#[test]
fn label_points_at_its_control() {
    fn app() -> Element {
        rsx! { Label { html_for: "email", "Email" } }
    }
    let html = render(app);
    assert!(html.contains(r#"for="email""#));
    assert!(html.contains(r#"data-slot="label""#));
}

#[test]
fn switch_reflects_checked_state_and_name() {
    fn on() -> Element {
        rsx! { Switch { name: "alerts", default_checked: true } }
    }
    fn off() -> Element {
        rsx! {
            KitProvider {
                Switch {}
            }
        }
    }
    let html = render(on);
    assert!(html.contains(r#"data-state="checked""#));
    assert!(html.contains(r#"name="alerts""#));
    assert!(html.contains(r#"id="alerts""#));

    let html = render(off);
    assert!(html.contains(r#"data-state="unchecked""#));
    assert!(html.contains(r#"id="switch-1""#));
}
