use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::IdStrategy;

/// Unique id correlating a trigger with the content it controls.
///
/// Used as the DOM `id`, as the CSS anchor name and as the prefix of the
/// instance's event channel names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId {
    component: &'static str,
    key: String,
}

impl AnchorId {
    pub fn new(component: &'static str, key: impl Into<String>) -> Self {
        Self {
            component,
            key: key.into(),
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn as_str(&self) -> String {
        format!("{}-{}", self.component, self.key)
    }

    /// Channel name for `action` on this instance: `<component>-<action>-<id>`.
    pub fn event_name(&self, action: &str) -> String {
        format!("{}-{}-{}", self.component, action, self.as_str())
    }

    /// CSS anchor name linking the trigger to its positioned content.
    pub fn anchor_name(&self) -> String {
        format!("--anchor-{}", self.as_str())
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.component, self.key)
    }
}

/// Source of instance ids. Injected so tests and SSR can be deterministic.
pub trait IdProvider {
    fn next_id(&self, component: &'static str) -> AnchorId;
}

/// Monotonic ids: `dialog-1`, `sheet-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self, component: &'static str) -> AnchorId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        AnchorId::new(component, n.to_string())
    }
}

/// Eight hex characters from a v4 uuid.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&self, component: &'static str) -> AnchorId {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        AnchorId::new(component, &simple[..8])
    }
}

/// Build the provider selected in [`KitConfig`](crate::KitConfig).
pub fn provider_for(strategy: IdStrategy) -> Box<dyn IdProvider> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIds::new()),
        IdStrategy::Random => Box::new(RandomIds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_increment_across_components() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id("dialog").as_str(), "dialog-1");
        assert_eq!(ids.next_id("sheet").as_str(), "sheet-2");
    }

    #[test]
    fn event_name_follows_component_action_id() {
        let id = AnchorId::new("dialog", "7");
        assert_eq!(id.event_name("open"), "dialog-open-dialog-7");
        assert_eq!(id.anchor_name(), "--anchor-dialog-7");
        assert_eq!(id.to_string(), "dialog-7");
    }

    #[test]
    fn random_ids_are_unique_and_prefixed() {
        let ids = RandomIds;
        let seen: HashSet<String> = (0..64).map(|_| ids.next_id("tooltip").as_str()).collect();
        assert_eq!(seen.len(), 64);
        assert!(seen
            .iter()
            .all(|id| id.starts_with("tooltip-") && id.len() == "tooltip-".len() + 8));
    }

    #[test]
    fn provider_for_respects_strategy() {
        let provider = provider_for(IdStrategy::Sequential);
        assert_eq!(provider.next_id("select").as_str(), "select-1");
    }
}
