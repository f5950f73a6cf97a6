use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::{TimerHandle, Timers};

struct Body<N> {
    next_key: u64,
    children: Vec<(u64, N)>,
}

impl<N> Body<N> {
    fn detach(&mut self, key: u64) {
        self.children.retain(|(k, _)| *k != key);
    }
}

/// The document body as seen by portals: an ordered list of relocated
/// nodes, most recently attached last.
pub struct PortalHost<N> {
    body: Rc<RefCell<Body<N>>>,
    timers: Timers,
    removal_delay: Duration,
}

impl<N: Clone + 'static> PortalHost<N> {
    pub fn new(timers: Timers, removal_delay: Duration) -> Self {
        Self {
            body: Rc::new(RefCell::new(Body {
                next_key: 0,
                children: Vec::new(),
            })),
            timers,
            removal_delay,
        }
    }

    /// Move `node` into the body as its last child.
    pub fn acquire(&self, node: N) -> Portal<N> {
        let key = {
            let mut body = self.body.borrow_mut();
            let key = body.next_key;
            body.next_key += 1;
            body.children.push((key, node.clone()));
            key
        };
        tracing::debug!(key, "portal attached");
        Portal {
            key,
            node,
            body: Rc::downgrade(&self.body),
            timers: self.timers.clone(),
            removal_delay: self.removal_delay,
            phase: Rc::new(RefCell::new(Phase::Attached)),
        }
    }

    pub fn children(&self) -> Vec<N> {
        self.body
            .borrow()
            .children
            .iter()
            .map(|(_, n)| n.clone())
            .collect()
    }

    pub fn last(&self) -> Option<N> {
        self.body.borrow().children.last().map(|(_, n)| n.clone())
    }

    pub fn len(&self) -> usize {
        self.body.borrow().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

enum Phase {
    Attached,
    Detaching(TimerHandle),
    Detached,
}

/// Externally visible lifecycle of a [`Portal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalStatus {
    Attached,
    /// Closed, waiting for the exit animation before detaching.
    Detaching,
    Detached,
}

/// One relocated node. Dropping the portal detaches the node immediately.
pub struct Portal<N> {
    key: u64,
    node: N,
    body: Weak<RefCell<Body<N>>>,
    timers: Timers,
    removal_delay: Duration,
    phase: Rc<RefCell<Phase>>,
}

impl<N: Clone + 'static> Portal<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn status(&self) -> PortalStatus {
        match &*self.phase.borrow() {
            Phase::Attached => PortalStatus::Attached,
            Phase::Detaching(_) => PortalStatus::Detaching,
            Phase::Detached => PortalStatus::Detached,
        }
    }

    /// Schedule detachment after the removal delay. Returns `false` when the
    /// portal was already closing or detached.
    pub fn close(&self) -> bool {
        if !matches!(*self.phase.borrow(), Phase::Attached) {
            return false;
        }
        let key = self.key;
        let body = self.body.clone();
        let phase = Rc::downgrade(&self.phase);
        let handle = self.timers.schedule(self.removal_delay, move || {
            if let Some(body) = body.upgrade() {
                body.borrow_mut().detach(key);
            }
            if let Some(phase) = phase.upgrade() {
                *phase.borrow_mut() = Phase::Detached;
            }
            tracing::debug!(key, "portal detached after delay");
        });
        *self.phase.borrow_mut() = Phase::Detaching(handle);
        true
    }

    /// The exit animation finished: detach now instead of waiting for the
    /// fallback timer.
    pub fn transition_end(&self) -> bool {
        let mut phase = self.phase.borrow_mut();
        let Phase::Detaching(handle) = &*phase else {
            return false;
        };
        handle.cancel();
        *phase = Phase::Detached;
        drop(phase);
        self.detach_now();
        true
    }

    /// Bring the node back. A pending removal is cancelled so it cannot
    /// take the freshly reopened node with it.
    pub fn reopen(&self) -> bool {
        let mut phase = self.phase.borrow_mut();
        match &*phase {
            Phase::Attached => false,
            Phase::Detaching(handle) => {
                handle.cancel();
                *phase = Phase::Attached;
                true
            }
            Phase::Detached => {
                if let Some(body) = self.body.upgrade() {
                    body.borrow_mut().children.push((self.key, self.node.clone()));
                }
                *phase = Phase::Attached;
                true
            }
        }
    }

    fn detach_now(&self) {
        if let Some(body) = self.body.upgrade() {
            body.borrow_mut().detach(self.key);
        }
    }
}

impl<N> Drop for Portal<N> {
    fn drop(&mut self) {
        if let Phase::Detaching(handle) = &*self.phase.borrow() {
            handle.cancel();
        }
        if let Some(body) = self.body.upgrade() {
            body.borrow_mut().detach(self.key);
        }
    }
}

impl<N> fmt::Debug for Portal<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match &*self.phase.borrow() {
            Phase::Attached => PortalStatus::Attached,
            Phase::Detaching(_) => PortalStatus::Detaching,
            Phase::Detached => PortalStatus::Detached,
        };
        f.debug_struct("Portal")
            .field("key", &self.key)
            .field("status", &status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn host() -> (Timers, PortalHost<&'static str>) {
        let timers = Timers::new();
        let host = PortalHost::new(timers.clone(), Duration::from_millis(200));
        (timers, host)
    }

    #[test]
    fn acquire_appends_as_last_child() {
        let (_timers, host) = host();
        let _a = host.acquire("toast");
        let _b = host.acquire("dialog");
        assert_eq!(host.children(), vec!["toast", "dialog"]);
        assert_eq!(host.last(), Some("dialog"));
    }

    #[test]
    fn close_detaches_only_after_delay() {
        let (timers, host) = host();
        let portal = host.acquire("dialog");

        assert!(portal.close());
        assert_eq!(portal.status(), PortalStatus::Detaching);
        timers.advance(Duration::from_millis(199));
        assert_eq!(host.len(), 1);
        timers.advance(Duration::from_millis(1));
        assert!(host.is_empty());
        assert_eq!(portal.status(), PortalStatus::Detached);
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let (timers, host) = host();
        let portal = host.acquire("sheet");
        assert!(portal.close());
        assert!(!portal.close());
        timers.advance(Duration::from_millis(500));
        assert!(!portal.close());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn reopen_supersedes_pending_removal() {
        let (timers, host) = host();
        let portal = host.acquire("dialog");
        portal.close();
        timers.advance(Duration::from_millis(100));
        assert!(portal.reopen());
        timers.advance(Duration::from_millis(500));
        assert_eq!(host.children(), vec!["dialog"]);
        assert_eq!(portal.status(), PortalStatus::Attached);
    }

    #[test]
    fn reopen_after_detach_reattaches_last() {
        let (timers, host) = host();
        let portal = host.acquire("dialog");
        portal.close();
        timers.advance(Duration::from_millis(200));
        let _other = host.acquire("toast");
        assert!(portal.reopen());
        assert_eq!(host.children(), vec!["toast", "dialog"]);
    }

    #[test]
    fn transition_end_detaches_immediately() {
        let (timers, host) = host();
        let portal = host.acquire("sheet");
        assert!(!portal.transition_end());
        portal.close();
        assert!(portal.transition_end());
        assert!(host.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn drop_detaches_and_cancels() {
        let (timers, host) = host();
        let portal = host.acquire("sidebar");
        portal.close();
        drop(portal);
        assert!(host.is_empty());
        assert_eq!(timers.pending(), 0);
    }
}
