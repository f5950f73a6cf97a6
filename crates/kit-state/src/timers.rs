use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

struct Entry {
    id: u64,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Virtual-clock timer queue for the headless controllers.
///
/// Time only moves when [`Timers::advance`] is called, so hover debounces
/// and deferred portal removal are fully deterministic.
#[derive(Clone, Default)]
pub struct Timers {
    queue: Rc<RefCell<Queue>>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> TimerHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let deadline = queue.now + delay;
        queue.entries.push(Entry {
            id,
            deadline,
            callback: Box::new(callback),
        });
        TimerHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }

    /// Move the clock forward, firing every callback whose deadline falls
    /// inside the window, earliest first.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                let next = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.deadline <= target)
                    .min_by_key(|(_, e)| (e.deadline, e.id))
                    .map(|(i, _)| i);
                match next {
                    Some(index) => {
                        let entry = queue.entries.remove(index);
                        queue.now = entry.deadline;
                        Some(entry.callback)
                    }
                    None => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("Timers")
            .field("now", &queue.now)
            .field("pending", &queue.entries.len())
            .finish()
    }
}

/// Handle to a scheduled callback.
///
/// Dropping the handle does not cancel the callback; scheduled work is
/// fire-and-forget unless [`TimerHandle::cancel`] is called.
pub struct TimerHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl TimerHandle {
    /// Returns `true` if the callback had not fired yet.
    pub fn cancel(&self) -> bool {
        let Some(queue) = self.queue.upgrade() else {
            return false;
        };
        let mut queue = queue.borrow_mut();
        let before = queue.entries.len();
        queue.entries.retain(|e| e.id != self.id);
        queue.entries.len() != before
    }

    pub fn is_pending(&self) -> bool {
        self.queue
            .upgrade()
            .is_some_and(|q| q.borrow().entries.iter().any(|e| e.id == self.id))
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("id", &self.id)
            .field("pending", &self.is_pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_deadline_order() {
        let timers = Timers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            let _ = timers.schedule(ms(delay), move || log.borrow_mut().push(label));
        }

        timers.advance(ms(15));
        assert_eq!(*log.borrow(), vec!["a"]);
        timers.advance(ms(100));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timers.now(), ms(115));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let timers = Timers::new();
        let fired = Rc::new(RefCell::new(false));
        let handle = {
            let fired = Rc::clone(&fired);
            timers.schedule(ms(10), move || *fired.borrow_mut() = true)
        };
        assert!(handle.is_pending());
        assert!(handle.cancel());
        assert!(!handle.cancel());
        timers.advance(ms(50));
        assert!(!*fired.borrow());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn callbacks_can_reschedule_within_window() {
        let timers = Timers::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        {
            let inner = timers.clone();
            let hits = Rc::clone(&hits);
            let _ = timers.schedule(ms(10), move || {
                hits.borrow_mut().push(inner.now());
                let hits = Rc::clone(&hits);
                let clock = inner.clone();
                let _ = inner.schedule(ms(10), move || hits.borrow_mut().push(clock.now()));
            });
        }
        timers.advance(ms(25));
        assert_eq!(*hits.borrow(), vec![ms(10), ms(20)]);
    }
}
