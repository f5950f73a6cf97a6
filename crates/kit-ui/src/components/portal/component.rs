use dioxus::dioxus_core::schedule_update;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

struct Entry {
    key: String,
    content: Element,
}

#[derive(Default)]
struct Outlet {
    entries: Vec<Entry>,
    refresh: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Content lifted out of the component tree by [`Portal`]s.
///
/// Entries keep their mount order, newest last, and are rendered by the
/// [`PortalOutlet`] that [`KitProvider`](crate::KitProvider) places after
/// the rest of the page.
#[derive(Clone, Default)]
pub struct PortalRegistry {
    outlet: Rc<RefCell<Outlet>>,
}

impl PortalRegistry {
    /// Keys of the mounted portals in document order.
    pub fn keys(&self) -> Vec<String> {
        self.outlet
            .borrow()
            .entries
            .iter()
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Insert or replace the content under `key`. A new key goes last.
    fn mount(&self, key: &str, content: Element) {
        {
            let mut outlet = self.outlet.borrow_mut();
            match outlet.entries.iter_mut().find(|entry| entry.key == key) {
                Some(entry) => entry.content = content,
                None => {
                    tracing::debug!(key, "portal attached");
                    outlet.entries.push(Entry {
                        key: key.to_string(),
                        content,
                    });
                }
            }
        }
        self.refresh();
    }

    fn unmount(&self, key: &str) {
        let removed = {
            let Ok(mut outlet) = self.outlet.try_borrow_mut() else {
                return;
            };
            let before = outlet.entries.len();
            outlet.entries.retain(|entry| entry.key != key);
            outlet.entries.len() != before
        };
        if removed {
            tracing::debug!(key, "portal detached");
            self.refresh();
        }
    }

    fn attach(&self, refresh: Arc<dyn Fn() + Send + Sync>) {
        self.outlet.borrow_mut().refresh = Some(refresh);
    }

    fn snapshot(&self) -> Vec<(String, Element)> {
        self.outlet
            .borrow()
            .entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.content.clone()))
            .collect()
    }

    fn refresh(&self) {
        let refresh = self.outlet.borrow().refresh.clone();
        if let Some(refresh) = refresh {
            refresh();
        }
    }
}

/// Renders every mounted portal, in mount order.
#[component]
pub fn PortalOutlet() -> Element {
    let registry = use_context::<PortalRegistry>();
    use_hook({
        let registry = registry.clone();
        move || registry.attach(schedule_update())
    });
    let entries = registry.snapshot();

    rsx! {
        for (key, content) in entries {
            PortalMount { key: "{key}", content }
        }
    }
}

#[component]
fn PortalMount(content: Element) -> Element {
    content
}

/// Top-layer container for overlay content.
///
/// While `mounted`, the content is handed to the provider's
/// [`PortalOutlet`] and rendered after the page. It mounts under the outlet,
/// so it sees contexts provided above the [`KitProvider`](crate::KitProvider)
/// and whatever the owning component provides again inside it. Without a
/// provider the content renders in place.
///
/// `on_exit` fires on `animationend` inside the portal; owners use it to
/// finish a pending close early.
#[component]
pub fn Portal(
    id: String,
    mounted: bool,
    #[props(default = "open")] state: &'static str,
    #[props(default = "portal")] slot: &'static str,
    #[props(default)] on_exit: EventHandler,
    children: Element,
) -> Element {
    let registry = use_hook(try_consume_context::<PortalRegistry>);
    use_drop({
        let registry = registry.clone();
        let key = id.clone();
        move || {
            if let Some(registry) = &registry {
                registry.unmount(&key);
            }
        }
    });

    let content = mounted.then(|| {
        rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                class: "portal",
                "data-slot": slot,
                "data-state": state,
                onanimationend: move |_| on_exit.call(()),
                {children}
            }
        }
    });

    match (registry, content) {
        (Some(registry), Some(content)) => {
            registry.mount(&id, content);
            rsx! {}
        }
        (Some(registry), None) => {
            registry.unmount(&id);
            rsx! {}
        }
        (None, Some(content)) => content,
        (None, None) => rsx! {},
    }
}
