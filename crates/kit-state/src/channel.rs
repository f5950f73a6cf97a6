use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::TimerHandle;

type Handler<M> = Rc<dyn Fn(&M)>;

struct Subscribers<M> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<M>)>>,
}

/// A named, single-threaded pub/sub channel owned by one component instance.
///
/// Replaces dispatching string-named events on a global document: the
/// owner holds the channel, and every registration returns a
/// [`Subscription`] that unregisters itself when dropped.
pub struct Channel<M> {
    name: String,
    subscribers: Rc<Subscribers<M>>,
}

impl<M: 'static> Channel<M> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Rc::new(Subscribers {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe(&self, handler: impl Fn(&M) + 'static) -> Subscription {
        let id = self.subscribers.next_id.get();
        self.subscribers.next_id.set(id + 1);
        self.subscribers
            .handlers
            .borrow_mut()
            .push((id, Rc::new(handler)));

        let weak: Weak<Subscribers<M>> = Rc::downgrade(&self.subscribers);
        Subscription {
            channel: self.name.clone(),
            remove: Some(Box::new(move || {
                if let Some(subs) = weak.upgrade() {
                    subs.handlers.borrow_mut().retain(|(h, _)| *h != id);
                }
            })),
        }
    }

    /// Deliver `message` to every current subscriber, returning how many
    /// handlers ran. Handlers may subscribe or unsubscribe while running;
    /// changes take effect from the next publish.
    pub fn publish(&self, message: &M) -> usize {
        let snapshot: Vec<Handler<M>> = self
            .subscribers
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in &snapshot {
            handler(message);
        }
        snapshot.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.handlers.borrow().len()
    }
}

impl<M> fmt::Debug for Channel<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.handlers.borrow().len())
            .finish()
    }
}

/// Registration handle. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    channel: String,
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel)
            .field("active", &self.remove.is_some())
            .finish()
    }
}

/// Everything a component registered during one lifetime (an open cycle, or
/// the whole instance). Disposing the scope releases all of it.
#[derive(Debug, Default)]
pub struct ListenerScope {
    subscriptions: Vec<Subscription>,
    timers: Vec<TimerHandle>,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn add_timer(&mut self, timer: TimerHandle) {
        self.timers.push(timer);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len() + self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispose(&mut self) {
        for timer in self.timers.drain(..) {
            timer.cancel();
        }
        self.subscriptions.clear();
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_all_subscribers() {
        let channel = Channel::<u32>::new("dialog-open-dialog-1");
        let total = Rc::new(Cell::new(0));
        let a = {
            let total = Rc::clone(&total);
            channel.subscribe(move |n| total.set(total.get() + n))
        };
        let b = {
            let total = Rc::clone(&total);
            channel.subscribe(move |n| total.set(total.get() + n * 10))
        };

        assert_eq!(channel.publish(&2), 2);
        assert_eq!(total.get(), 22);
        drop(a);
        drop(b);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let channel = Channel::<()>::new("x");
        let sub = channel.subscribe(|_| {});
        assert_eq!(channel.subscriber_count(), 1);
        drop(sub);
        assert_eq!(channel.subscriber_count(), 0);
        assert_eq!(channel.publish(&()), 0);
    }

    #[test]
    fn handler_may_cancel_itself_while_running() {
        let channel = Rc::new(Channel::<()>::new("x"));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let slot = Rc::clone(&slot);
            let hits = Rc::clone(&hits);
            channel.subscribe(move |_| {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        channel.publish(&());
        channel.publish(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_channel_is_harmless() {
        let channel = Channel::<()>::new("x");
        let sub = channel.subscribe(|_| {});
        drop(channel);
        sub.cancel();
    }

    #[test]
    fn scope_dispose_releases_everything() {
        let channel = Channel::<()>::new("x");
        let mut scope = ListenerScope::new();
        scope.add(channel.subscribe(|_| {}));
        scope.add(channel.subscribe(|_| {}));
        assert_eq!(scope.len(), 2);
        scope.dispose();
        assert!(scope.is_empty());
        assert_eq!(channel.subscriber_count(), 0);
    }
}
