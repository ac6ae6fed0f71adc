//! Single-threaded pub/sub value holder backing the preference stores.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    observers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A mutable value whose observers are notified synchronously on every `set`,
/// in subscription order, with no batching or deduplication.
///
/// Clones share state. Single-threaded by construction; delivery runs to
/// completion on the calling thread.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value, then notify every observer.
    ///
    /// Observers run against a snapshot of the observer list and without any
    /// live borrow of the inner state, so a callback may subscribe or
    /// unsubscribe reentrantly.
    pub fn set(&self, value: T) {
        let (current, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            let snapshot: Vec<Callback<T>> = inner
                .observers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
            (inner.value.clone(), snapshot)
        };

        for callback in snapshot {
            callback(&current);
        }
    }

    /// Register `callback` to run on every subsequent `set`.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Rc::new(callback)));

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Handle returned by [`Observable::subscribe`].
///
/// Dropping the handle keeps the subscription alive; call
/// [`unsubscribe`](Subscription::unsubscribe) to stop further notification.
pub struct Subscription<T> {
    inner: Weak<RefCell<Inner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().observers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_get_returns_current_value() {
        let observable = Observable::new("google".to_string());
        assert_eq!(observable.get(), "google");
        observable.set("bing".to_string());
        assert_eq!(observable.get(), "bing");
    }

    #[test]
    fn test_observers_fire_in_subscription_order() {
        let observable = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        let _a = observable.subscribe(move |v| first.borrow_mut().push(("a", *v)));
        let second = Rc::clone(&seen);
        let _b = observable.subscribe(move |v| second.borrow_mut().push(("b", *v)));

        observable.set(1);
        observable.set(2);

        assert_eq!(
            *seen.borrow(),
            vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notification() {
        let observable = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = observable.subscribe(move |v| sink.borrow_mut().push(*v));

        observable.set(1);
        subscription.unsubscribe();
        observable.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_callback_may_unsubscribe_reentrantly() {
        let observable = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let slot: Rc<RefCell<Option<Subscription<i32>>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let inner_slot = Rc::clone(&slot);
        let subscription = observable.subscribe(move |v| {
            sink.borrow_mut().push(*v);
            if let Some(subscription) = inner_slot.borrow_mut().take() {
                subscription.unsubscribe();
            }
        });
        *slot.borrow_mut() = Some(subscription);

        observable.set(1);
        observable.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }
}
