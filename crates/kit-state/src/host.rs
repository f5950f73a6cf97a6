use std::cell::Cell;

use crate::{AnchorId, Channel};

/// A key press, reduced to what the kit reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Character(char),
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        let mut chars = key.chars();
        match (key, chars.next(), chars.next()) {
            ("Escape", _, _) => Key::Escape,
            (_, Some(c), None) => Key::Character(c),
            _ => Key::Other(key.to_string()),
        }
    }
}

/// A pointer press somewhere in the document. `inside` names the instance
/// whose content received it; `None` means it landed outside every overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown {
    pub inside: Option<AnchorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

/// Headless stand-in for the browser's `document` and `window` event
/// surfaces. Controllers subscribe to its channels; tests drive it.
#[derive(Debug)]
pub struct Host {
    pub keydown: Channel<Key>,
    pub pointer_down: Channel<PointerDown>,
    pub resize: Channel<Viewport>,
    viewport: Cell<Viewport>,
    scroll_locks: Cell<usize>,
}

impl Host {
    pub fn new(width: u32) -> Self {
        Self {
            keydown: Channel::new("keydown"),
            pointer_down: Channel::new("pointerdown"),
            resize: Channel::new("resize"),
            viewport: Cell::new(Viewport { width }),
            scroll_locks: Cell::new(0),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn press(&self, key: impl Into<Key>) {
        self.keydown.publish(&key.into());
    }

    pub fn click(&self, inside: Option<AnchorId>) {
        self.pointer_down.publish(&PointerDown { inside });
    }

    pub fn resize_to(&self, width: u32) {
        let viewport = Viewport { width };
        self.viewport.set(viewport);
        self.resize.publish(&viewport);
    }

    /// Hide body overflow while a modal is open. Locks nest.
    pub fn lock_scroll(&self) {
        self.scroll_locks.set(self.scroll_locks.get() + 1);
    }

    pub fn unlock_scroll(&self) {
        self.scroll_locks.set(self.scroll_locks.get().saturating_sub(1));
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks.get() > 0
    }

    /// Total listeners currently registered on the document and window.
    pub fn listener_count(&self) -> usize {
        self.keydown.subscriber_count()
            + self.pointer_down.subscriber_count()
            + self.resize.subscriber_count()
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(1280)
    }
}
