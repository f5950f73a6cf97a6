use std::rc::Rc;

use dioxus::prelude::*;
use kit_state::{provider_for, AnchorId, IdProvider, KitConfig, SequentialIds};

use crate::{PortalOutlet, PortalRegistry};

/// Ids handed out to components rendered outside any [`KitProvider`].
static FALLBACK_IDS: SequentialIds = SequentialIds::new();

/// Configuration and id source shared by every kit component below a
/// [`KitProvider`].
#[derive(Clone)]
pub struct KitContext {
    pub config: KitConfig,
    ids: Option<Rc<dyn IdProvider>>,
}

impl KitContext {
    pub fn new(config: KitConfig) -> Self {
        let ids: Rc<dyn IdProvider> = Rc::from(provider_for(config.ids));
        Self {
            config,
            ids: Some(ids),
        }
    }

    pub fn next_id(&self, component: &'static str) -> AnchorId {
        match &self.ids {
            Some(ids) => ids.next_id(component),
            None => FALLBACK_IDS.next_id(component),
        }
    }
}

impl Default for KitContext {
    fn default() -> Self {
        Self {
            config: KitConfig::default(),
            ids: None,
        }
    }
}

/// Makes a [`KitConfig`] and a fresh id provider available to the tree,
/// and renders portalled overlays after `children`.
///
/// Mount once near the root, below any router or app contexts that overlay
/// content needs. Components rendered without a provider fall back to
/// default timings and a process-wide id counter, and portal in place.
#[component]
pub fn KitProvider(#[props(default)] config: KitConfig, children: Element) -> Element {
    use_context_provider(|| KitContext::new(config.clone()));
    use_context_provider(PortalRegistry::default);

    rsx! {
        {children}
        PortalOutlet {}
    }
}

/// Current kit context, or the defaults when no provider is mounted.
pub fn use_kit() -> KitContext {
    try_consume_context::<KitContext>().unwrap_or_default()
}
