use std::collections::BTreeMap;

use dioxus::prelude::*;
use kit_ui::kit_state::{validators, FormState, SelectOption};
use kit_ui::{
    use_form, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormDescription,
    FormField, FormInput, FormLabel, FormMessage, FormPasswordInput, FormSelect,
};

fn signup_form() -> FormState {
    FormState::new()
        .field("name", Some(validators::required("Name is required")))
        .field(
            "email",
            Some(validators::all(vec![
                validators::required("Email is required"),
                validators::email("Enter a valid email address"),
            ])),
        )
        .field("age", Some(validators::number("Age must be a number")))
        .field("plan", Some(validators::required("Choose a plan")))
        .field(
            "password",
            Some(validators::password_strength(
                "Use 8+ characters with an uppercase letter and a digit",
            )),
        )
}

/// Sign-up form: validates on blur and on submit, then shows the payload.
#[component]
pub fn Signup() -> Element {
    let form = use_form(signup_form);
    let mut submitted = use_signal(|| None::<String>);
    let plans = vec![
        SelectOption::new("free", "Free"),
        SelectOption::new("pro", "Pro"),
        SelectOption::new("team", "Team"),
    ];

    let on_submit = move |values: BTreeMap<String, String>| {
        match serde_json::to_string_pretty(&values) {
            Ok(json) => submitted.set(Some(json)),
            Err(err) => tracing::warn!(%err, "could not render submitted values"),
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Create an account" }
                CardDescription { "Every field is checked when it loses focus." }
            }
            CardContent {
                Form { form, on_submit, submit_label: "Submit",
                    FormField { name: "name",
                        FormLabel { "Name" }
                        FormInput { placeholder: "Your name" }
                        FormMessage {}
                    }
                    FormField { name: "email",
                        FormLabel { "Email" }
                        FormInput { input_type: "email", placeholder: "you@example.com" }
                        FormMessage {}
                    }
                    FormField { name: "age",
                        FormLabel { "Age" }
                        FormInput { input_type: "number", placeholder: "Your age" }
                        FormDescription { "Optional." }
                        FormMessage {}
                    }
                    FormField { name: "plan",
                        FormLabel { "Plan" }
                        FormSelect { options: plans, placeholder: "Choose a plan" }
                        FormMessage {}
                    }
                    FormField { name: "password", id: "password",
                        FormLabel { "Password" }
                        FormPasswordInput {}
                        FormMessage {}
                    }
                }
            }
        }
        if let Some(json) = submitted() {
            pre { class: "gallery-result", "{json}" }
        }
    }
}
