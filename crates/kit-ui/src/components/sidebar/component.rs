use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use kit_state::{
    CollapseMode, Key, OverlayPhase, SidebarModel, SidebarOptions, SidebarSide, SidebarVariant,
    Transition,
};

use crate::components::button::{button_attributes, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconName};
use crate::{sleep, use_anchor_id, use_kit, DomListener, DomMessage, Portal};

// ─── Context ───────────────────────────────────────────────────────────

/// Handle to the [`SidebarModel`] owned by the nearest [`SidebarProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarHandle {
    model: Signal<SidebarModel>,
    id: Signal<String>,
}

impl SidebarHandle {
    pub fn model(&self) -> SidebarModel {
        *self.model.read()
    }

    pub fn is_open(&self) -> bool {
        self.model.read().is_open()
    }

    pub fn is_mobile(&self) -> bool {
        self.model.read().is_mobile()
    }

    pub fn open(self) -> bool {
        self.apply(SidebarModel::open)
    }

    pub fn close(self) -> bool {
        self.apply(SidebarModel::close)
    }

    pub fn toggle(self) -> bool {
        self.apply(SidebarModel::toggle)
    }

    fn apply(mut self, step: impl FnOnce(&mut SidebarModel) -> Transition) -> bool {
        let mut next = *self.model.peek();
        let transition = step(&mut next);
        if !transition.changed() {
            return false;
        }
        tracing::debug!(id = %self.id.peek(), ?transition, "sidebar transition");
        self.model.set(next);
        true
    }

    fn finish_close(mut self, generation: u64) {
        let mut next = *self.model.peek();
        if next.finish_close(generation) {
            self.model.set(next);
        }
    }
}

pub fn use_sidebar() -> SidebarHandle {
    use_context::<SidebarHandle>()
}

/// Provides the sidebar again inside the mobile portal.
#[component]
fn SidebarScope(sidebar: SidebarHandle, children: Element) -> Element {
    use_context_provider(|| sidebar);

    rsx! {
        {children}
    }
}

// Reports the viewport width once, then on every resize, and forwards key
// presses that are not typed into an editable element.
const VIEWPORT_SCRIPT: &str = r#"
dioxus.send({ kind: "viewport", width: window.innerWidth });
const onResize = () => dioxus.send({ kind: "resize", width: window.innerWidth });
const onKey = (e) => {
    const t = e.target;
    if (t && (t.isContentEditable || ["INPUT", "TEXTAREA", "SELECT"].includes(t.tagName))) return;
    if (e.key === "Escape") dioxus.send({ kind: "escape" });
    else dioxus.send({ kind: "key", key: e.key });
};
window.addEventListener("resize", onResize);
document.addEventListener("keydown", onKey);
await dioxus.recv();
window.removeEventListener("resize", onResize);
document.removeEventListener("keydown", onKey);
"#;

/// Owns the sidebar state and its permanent viewport and keyboard
/// listeners. Wrap the [`Sidebar`] and [`SidebarInset`] in it.
#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_open: bool,
    #[props(default)] side: SidebarSide,
    #[props(default)] variant: SidebarVariant,
    #[props(default)] collapse: CollapseMode,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let kit = use_kit();
    let breakpoint = kit.config.mobile_breakpoint;
    let exit_delay = kit.config.portal_removal_delay();
    let options = SidebarOptions {
        side,
        variant,
        collapse,
    };

    let anchor = use_anchor_id("sidebar");
    let id = use_signal(|| anchor.as_str());
    // Desktop until the first viewport report arrives.
    let model = use_signal(|| SidebarModel::new(options, default_open, breakpoint, breakpoint));
    let handle = use_context_provider(|| SidebarHandle { model, id });

    let mut listener: Signal<Option<DomListener>> = use_signal(|| None);
    use_hook(move || {
        let started = DomListener::start(VIEWPORT_SCRIPT, move |message| {
            let mut model = model;
            match message {
                DomMessage::Viewport { width } => {
                    let current = *model.peek();
                    let measured = SidebarModel::new(options, current.is_open(), width, breakpoint);
                    if measured != current {
                        model.set(measured);
                    }
                }
                DomMessage::Resize { width } => {
                    let mut next = *model.peek();
                    next.resize(width);
                    if next != *model.peek() {
                        model.set(next);
                    }
                }
                DomMessage::Escape => {
                    handle.apply(|m| m.key(&Key::Escape));
                }
                DomMessage::Key { key } => {
                    handle.apply(|m| m.key(&Key::from(key.as_str())));
                }
                DomMessage::Outside => {}
            }
        });
        listener.set(Some(started));
    });

    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    use_effect(move || {
        let state = model().state();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        if state.phase() == OverlayPhase::Closing {
            let generation = state.generation();
            pending.set(Some(spawn(async move {
                sleep(exit_delay).await;
                handle.finish_close(generation);
            })));
        }
    });

    use_drop(move || {
        if let Ok(mut listener) = listener.try_write() {
            if let Some(listener) = listener.take() {
                listener.dispose();
            }
        }
    });

    let current = model();
    let base = vec![
        Attribute::new("class", "sidebar-provider", None, false),
        Attribute::new("data-slot", "sidebar-wrapper", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-state": current.data_state(),
            "data-side": side.as_str(),
            "data-variant": variant.as_str(),
            "data-collapsible": collapse.as_str(),
            "data-mobile": current.is_mobile().then_some("true"),
            ..merged,
            {children}
        }
    }
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar itself. Desktop renders it in place; mobile renders it as
/// an overlay that exists only while open or animating closed.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar();
    let current = sidebar.model();
    let options = current.options();
    let id = sidebar.id.read().clone();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-slot", "sidebar", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    if current.is_mobile() {
        let generation = current.state().generation();
        let data_state = current.state().data_state();
        return rsx! {
            Portal {
                id: id.clone(),
                mounted: current.renders_portal(),
                state: data_state,
                slot: "sidebar-portal",
                on_exit: move |_| sidebar.finish_close(generation),
                SidebarScope { sidebar,
                    div {
                        class: "sidebar-overlay",
                        "data-slot": "sidebar-overlay",
                        "data-state": data_state,
                        onclick: move |_| {
                            sidebar.close();
                        },
                    }
                    aside {
                        id: "{id}",
                        role: "dialog",
                        "aria-modal": "true",
                        "data-mobile": "true",
                        "data-side": options.side.as_str(),
                        "data-state": data_state,
                        "data-owner": "{id}",
                        ..merged,
                        div { class: "sidebar-inner", "data-slot": "sidebar-inner", {children} }
                    }
                }
            }
        };
    }

    if options.collapse == CollapseMode::None {
        return rsx! {
            aside {
                id: "{id}",
                "data-side": options.side.as_str(),
                ..merged,
                div { class: "sidebar-inner", "data-slot": "sidebar-inner", {children} }
            }
        };
    }

    rsx! {
        div {
            class: "sidebar-container",
            "data-slot": "sidebar-container",
            "data-state": current.data_state(),
            "data-side": options.side.as_str(),
            "data-variant": options.variant.as_str(),
            "data-collapsible": if current.is_open() { "" } else { options.collapse.as_str() },
            div { class: "sidebar-gap", "data-slot": "sidebar-gap" }
            aside {
                id: "{id}",
                "data-side": options.side.as_str(),
                ..merged,
                div { class: "sidebar-inner", "data-slot": "sidebar-inner", {children} }
            }
        }
    }
}

/// Button that toggles the sidebar. Shows a panel icon for the sidebar's side.
#[component]
pub fn SidebarTrigger(
    #[props(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar();
    let current = sidebar.model();
    let id = sidebar.id.read().clone();
    let icon = match current.options().side {
        SidebarSide::Left => IconName::PanelLeft,
        SidebarSide::Right => IconName::PanelRight,
    };
    let base = button_attributes("sidebar-trigger", variant, ButtonSize::Icon);
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            "aria-expanded": if current.is_open() { "true" } else { "false" },
            "aria-controls": "{id}",
            onclick: move |_| {
                sidebar.toggle();
            },
            ..merged,
            Icon { name: icon }
            {children}
        }
    }
}

/// Thin strip on the sidebar's edge that toggles it when clicked.
#[component]
pub fn SidebarRail(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let sidebar = use_sidebar();
    let base = vec![
        Attribute::new("class", "sidebar-rail", None, false),
        Attribute::new("data-slot", "sidebar-rail", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            tabindex: -1,
            title: "Toggle sidebar",
            onclick: move |_| {
                sidebar.toggle();
            },
            ..merged,
        }
    }
}

/// Main content area beside the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-inset", None, false),
        Attribute::new("data-slot", "sidebar-inset", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

fn slot(name: &'static str) -> Vec<Attribute> {
    vec![
        Attribute::new("class", name, None, false),
        Attribute::new("data-slot", name, None, false),
    ]
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-header"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable middle section.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-content"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-footer"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[component]
pub fn SidebarSeparator(
    #[props(default)] orientation: Orientation,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-separator"), attributes]);

    rsx! {
        div {
            role: "separator",
            "aria-orientation": orientation.as_str(),
            "data-orientation": orientation.as_str(),
            ..merged,
        }
    }
}

// ─── Group components ──────────────────────────────────────────────────

#[component]
pub fn SidebarGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-group"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarGroupLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-group-label"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Small icon button in a group's header row.
#[component]
pub fn SidebarGroupAction(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged =
        dioxus_primitives::merge_attributes(vec![slot("sidebar-group-action"), attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarGroupContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged =
        dioxus_primitives::merge_attributes(vec![slot("sidebar-group-content"), attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl MenuButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuButtonSize::Sm => "sm",
            MenuButtonSize::Default => "default",
            MenuButtonSize::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuButtonVariant {
    #[default]
    Default,
    Outline,
}

impl MenuButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuButtonVariant::Default => "default",
            MenuButtonVariant::Outline => "outline",
        }
    }
}

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu"), attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-item"), attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Navigation entry. On mobile, activating it also closes the overlay.
#[component]
pub fn SidebarMenuButton(
    #[props(default)] size: MenuButtonSize,
    #[props(default)] variant: MenuButtonVariant,
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar();
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-button"), attributes]);

    rsx! {
        button {
            r#type: "button",
            "data-size": size.as_str(),
            "data-variant": variant.as_str(),
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
                if sidebar.is_mobile() {
                    sidebar.close();
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Secondary action beside a menu button, optionally revealed only on hover.
#[component]
pub fn SidebarMenuAction(
    #[props(default)] show_on_hover: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-action"), attributes]);

    rsx! {
        button {
            r#type: "button",
            "data-show-on-hover": show_on_hover.then_some("true"),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuBadge(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-badge"), attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuSub(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-sub"), attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuSubItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged =
        dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-sub-item"), attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Link inside a sub-menu. Only `sm` and `default` sizes apply.
#[component]
pub fn SidebarMenuSubButton(
    #[props(default)] href: String,
    #[props(default)] size: MenuButtonSize,
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let size = match size {
        MenuButtonSize::Lg => MenuButtonSize::Default,
        other => other,
    };
    let merged =
        dioxus_primitives::merge_attributes(vec![slot("sidebar-menu-sub-button"), attributes]);

    rsx! {
        a {
            href: (!href.is_empty()).then_some(href),
            "data-size": size.as_str(),
            "data-active": if active { "true" } else { "false" },
            ..merged,
            {children}
        }
    }
}
