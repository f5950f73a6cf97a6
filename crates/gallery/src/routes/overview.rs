use dioxus::prelude::*;
use kit_ui::kit_state::SelectOption;
use kit_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Collapsible, CollapsibleContent, CollapsibleTrigger, Icon, IconName,
    Input, Label, PasswordInput, Select, Switch, Tooltip, TooltipAlign, TooltipContent,
    TooltipTrigger,
};

const VARIANTS: [ButtonVariant; 6] = [
    ButtonVariant::Default,
    ButtonVariant::Destructive,
    ButtonVariant::Outline,
    ButtonVariant::Secondary,
    ButtonVariant::Ghost,
    ButtonVariant::Link,
];

const ALIGNS: [TooltipAlign; 4] = [
    TooltipAlign::Top,
    TooltipAlign::Right,
    TooltipAlign::Bottom,
    TooltipAlign::Left,
];

/// Stateless elements plus the small stateful ones that need no overlay.
#[component]
pub fn Overview() -> Element {
    let mut query = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notifications = use_signal(|| true);
    let mut fruit = use_signal(|| None::<String>);

    let typed = query.read().chars().count();
    let fruits = vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("cherry", "Cherry"),
    ];

    rsx! {
        section { class: "gallery-section",
            h2 { "Buttons" }
            div { class: "gallery-row",
                for (variant, name) in VARIANTS.iter().map(|v| (*v, v.as_str())) {
                    Button { key: "{name}", variant, "{name}" }
                }
            }
            div { class: "gallery-row",
                Button { size: ButtonSize::Sm, "Small" }
                Button { size: ButtonSize::Lg, "Large" }
                Button { size: ButtonSize::Icon, variant: ButtonVariant::Outline,
                    Icon { name: IconName::Check }
                }
                Button { disabled: true, "Disabled" }
            }
        }

        section { class: "gallery-section",
            h2 { "Card" }
            Card {
                CardHeader {
                    CardTitle { "Notifications" }
                    CardDescription { "Choose what reaches your inbox." }
                    CardAction {
                        Switch {
                            name: "notifications",
                            default_checked: true,
                            on_checked_change: move |checked| notifications.set(checked),
                        }
                    }
                }
                CardContent {
                    p { if notifications() { "You will receive updates." } else { "Updates are muted." } }
                }
                CardFooter {
                    Button { variant: ButtonVariant::Outline, "Cancel" }
                    Button { "Save" }
                }
            }
        }

        section { class: "gallery-section",
            h2 { "Inputs" }
            div { class: "gallery-row",
                Label { html_for: "search", "Search" }
                Input {
                    id: "search",
                    placeholder: "Type to search",
                    value: query(),
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                span { "{typed} characters" }
            }
            div { class: "gallery-row",
                PasswordInput {
                    value: password(),
                    on_input: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div { class: "gallery-row",
                Select {
                    options: fruits,
                    placeholder: "Pick a fruit",
                    on_change: move |value: String| fruit.set(Some(value)),
                }
                if let Some(value) = fruit() {
                    span { "Selected {value}" }
                }
            }
        }

        section { class: "gallery-section",
            h2 { "Tooltip" }
            div { class: "gallery-row",
                for (align, name) in ALIGNS.iter().map(|a| (*a, a.as_str())) {
                    Tooltip { key: "{name}", align,
                        TooltipTrigger {
                            Button { variant: ButtonVariant::Outline, "{name}" }
                        }
                        TooltipContent { "Shown on the {name}" }
                    }
                }
            }
        }

        section { class: "gallery-section",
            h2 { "Collapsible" }
            Collapsible {
                CollapsibleTrigger {
                    "Three starred repositories"
                    Icon { name: IconName::ChevronDown }
                }
                CollapsibleContent {
                    ul {
                        li { "dioxus" }
                        li { "tokio" }
                        li { "serde" }
                    }
                }
            }
        }
    }
}
