use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(&ChangeNotifier)>;

/// Synchronous "collection changed" event.
///
/// Subscribers are called in subscription order, once per notification,
/// and receive the notifier itself. The list is snapshotted before calling
/// out, so a callback may subscribe or unsubscribe (itself or others)
/// through that reference; such changes take effect from the next
/// notification.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&ChangeNotifier) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(self);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_calls_each_subscriber_once() {
        let notifier = ChangeNotifier::new();
        let calls = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let calls = Rc::clone(&calls);
            notifier.subscribe(move |_| calls.set(calls.get() + 1));
        }

        notifier.notify();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = ChangeNotifier::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = notifier.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_subscribe_during_notify_applies_next_time() {
        let notifier = ChangeNotifier::new();
        let late_calls = Rc::new(Cell::new(0));

        let late = Rc::clone(&late_calls);
        notifier.subscribe(move |notifier| {
            let late = Rc::clone(&late);
            notifier.subscribe(move |_| late.set(late.get() + 1));
        });

        notifier.notify();
        assert_eq!(late_calls.get(), 0);
        assert_eq!(notifier.subscriber_count(), 2);

        notifier.notify();
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_self_during_notify() {
        let notifier = ChangeNotifier::new();
        let calls = Rc::new(Cell::new(0));
        let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let counter = Rc::clone(&calls);
        let slot = Rc::clone(&own_id);
        let id = notifier.subscribe(move |notifier| {
            counter.set(counter.get() + 1);
            if let Some(id) = slot.get() {
                notifier.unsubscribe(id);
            }
        });
        own_id.set(Some(id));

        notifier.notify();
        notifier.notify();
        assert_eq!(calls.get(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_dropping_notifier_releases_callbacks() {
        let notifier = ChangeNotifier::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        notifier.subscribe(move |notifier| {
            counter.set(counter.get() + 1);
            let counter = Rc::clone(&counter);
            notifier.subscribe(move |_| counter.set(counter.get() + 1));
        });
        notifier.notify();
        assert_eq!(Rc::strong_count(&calls), 3);

        drop(notifier);
        assert_eq!(Rc::strong_count(&calls), 1);
    }
}
