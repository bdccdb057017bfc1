//! Observable single-value container.
//!
//! Subscribers are kept in an id-keyed map so that ids double as stable
//! unsubscribe tokens and iteration order equals subscription order.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

/// A value waiting to be delivered, with the subscribers registered when
/// it was set.
type Delivery<T> = (Rc<T>, Vec<(u64, Callback<T>)>);

struct Inner<T> {
    value: Rc<T>,
    subscribers: BTreeMap<u64, Callback<T>>,
    next_id: u64,
    pending: VecDeque<Delivery<T>>,
    notifying: bool,
}

/// Observable value container with get/set/subscribe.
///
/// Notification is synchronous: `set` returns after every subscriber has
/// seen the new value. Subscribers may call back into the store while being
/// notified; no `RefCell` borrow is held across a callback. A `set` made
/// from inside a subscriber is queued behind the value being delivered, so
/// every subscriber sees every value, in the order they were set.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: 'static> Store<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: Rc::new(initial),
                subscribers: BTreeMap::new(),
                next_id: 0,
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        T::clone(&self.inner.borrow().value)
    }

    /// Borrow the current value without cloning it.
    ///
    /// `f` sees the value as it was when `with` was called, even if it sets
    /// a new one.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = Rc::clone(&self.inner.borrow().value);
        f(&value)
    }

    /// Replace the value and notify every subscriber in subscription order.
    pub fn set(&self, value: T) {
        let drain = {
            let mut inner = self.inner.borrow_mut();
            let value = Rc::new(value);
            let snapshot = inner
                .subscribers
                .iter()
                .map(|(id, callback)| (*id, Rc::clone(callback)))
                .collect();
            inner.value = Rc::clone(&value);
            inner.pending.push_back((value, snapshot));
            !std::mem::replace(&mut inner.notifying, true)
        };

        if drain {
            self.notify();
        }
    }

    /// Mutate the value in place, then notify like [`Store::set`].
    pub fn update(&self, f: impl FnOnce(&mut T))
    where
        T: Clone,
    {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Register `f`, invoke it once with the current value, and return the
    /// handle that removes it again.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Unsubscribe {
        let callback: Callback<T> = Rc::new(f);
        let (id, value) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.insert(id, Rc::clone(&callback));
            (id, Rc::clone(&inner.value))
        };
        log::trace!("store subscriber {id} registered");

        callback(&value);

        let inner: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Unsubscribe { store: inner, id }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Deliver queued values until none are left. Only the outermost `set`
    /// drains; nested ones just enqueue.
    fn notify(&self) {
        let _done = Notifying(&*self.inner);

        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            let Some((value, snapshot)) = next else {
                break;
            };

            for (id, callback) in snapshot {
                // Unsubscribed by an earlier callback of this round.
                if !self.inner.borrow().subscribers.contains_key(&id) {
                    continue;
                }
                callback(&value);
            }
        }
    }
}

/// Clears the `notifying` flag when the drain ends, including by unwinding.
struct Notifying<'a, T>(&'a RefCell<Inner<T>>);

impl<T> Drop for Notifying<'_, T> {
    fn drop(&mut self) {
        let leftover = {
            let mut inner = self.0.borrow_mut();
            inner.notifying = false;
            std::mem::take(&mut inner.pending)
        };
        drop(leftover);
    }
}

trait Detach {
    fn detach(&self, id: u64) -> bool;
}

impl<T> Detach for RefCell<Inner<T>> {
    fn detach(&self, id: u64) -> bool {
        let removed = self.borrow_mut().subscribers.remove(&id);
        removed.is_some()
    }
}

/// Handle that removes one subscriber from its store.
///
/// Holds only a weak reference, so it never keeps a store alive. Calling
/// [`Unsubscribe::unsubscribe`] more than once, or after the store is gone,
/// does nothing.
pub struct Unsubscribe {
    store: Weak<dyn Detach>,
    id: u64,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        if let Some(store) = self.store.upgrade() {
            if store.detach(self.id) {
                log::trace!("store subscriber {} removed", self.id);
            }
        }
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_get_returns_last_set_value() {
        let store = Store::new(String::from("initial"));
        for value in ["a", "b", "c"] {
            store.set(value.to_string());
        }
        assert_eq!(store.get(), "c");
    }

    #[test]
    fn test_subscribe_receives_current_value_once() {
        let store = Store::new(0);
        store.set(1);
        store.set(2);

        let (seen, callback) = recorder();
        let _handle = store.subscribe(callback);
        assert_eq!(*seen.borrow(), vec![2]);

        store.set(3);
        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_subscribers_notified_in_subscription_order() {
        let store = Store::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let handles: Vec<Unsubscribe> = (0..3)
            .map(|n| {
                let order = Rc::clone(&order);
                store.subscribe(move |_| order.borrow_mut().push(n))
            })
            .collect();
        order.borrow_mut().clear();

        store.set(7);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(handles.len(), 3);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let handle = store.subscribe(callback);
        let (_other_seen, other) = recorder();
        let _other = store.subscribe(other);

        handle.unsubscribe();
        handle.unsubscribe();
        assert_eq!(store.subscriber_count(), 1);

        store.set(5);
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped_is_noop() {
        let store = Store::new(1);
        let handle = store.subscribe(|_| {});
        drop(store);
        handle.unsubscribe();
    }

    #[test]
    fn test_update_mutates_in_place_and_notifies() {
        let store = Store::new(vec![1, 2]);
        let (seen, callback) = recorder();
        let _handle = store.subscribe(callback);

        store.update(|list| list.push(3));

        assert_eq!(store.get(), vec![1, 2, 3]);
        assert_eq!(seen.borrow().last(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_subscriber_removed_mid_notification_is_skipped() {
        let store = Store::new(0);
        let later: Rc<RefCell<Option<Unsubscribe>>> = Rc::new(RefCell::new(None));
        let later_calls = Rc::new(Cell::new(0));

        let slot = Rc::clone(&later);
        let _first = store.subscribe(move |value| {
            if *value == 1 {
                if let Some(handle) = slot.borrow().as_ref() {
                    handle.unsubscribe();
                }
            }
        });
        let calls = Rc::clone(&later_calls);
        *later.borrow_mut() = Some(store.subscribe(move |_| calls.set(calls.get() + 1)));
        assert_eq!(later_calls.get(), 1);

        store.set(1);
        assert_eq!(later_calls.get(), 1);
    }

    #[test]
    fn test_nested_set_is_delivered_after_outer_value() {
        let store = Store::new(0);
        let clamp = store.clone();
        let (clamp_seen, record) = recorder();
        let _clamp = store.subscribe(move |value: &i32| {
            record(value);
            if *value > 10 {
                clamp.set(10);
            }
        });
        let (seen, callback) = recorder();
        let _watch = store.subscribe(callback);

        store.set(42);

        assert_eq!(store.get(), 10);
        assert_eq!(*clamp_seen.borrow(), vec![0, 42, 10]);
        assert_eq!(*seen.borrow(), vec![0, 42, 10]);
    }

    #[test]
    fn test_nested_sets_keep_set_order() {
        let store = Store::new(0);
        let chain = store.clone();
        let _step = store.subscribe(move |value: &i32| {
            if (1..3).contains(value) {
                chain.set(value + 1);
            }
        });
        let (seen, callback) = recorder();
        let _watch = store.subscribe(callback);

        store.set(1);
        store.set(7);

        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 7]);
        assert_eq!(store.get(), 7);
    }

    #[test]
    fn test_with_allows_set() {
        let store = Store::new(1);
        let before = store.with(|value| {
            store.set(value + 1);
            *value
        });
        assert_eq!(before, 1);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_clones_share_value() {
        let store = Store::new(1);
        let alias = store.clone();
        alias.set(9);
        assert_eq!(store.get(), 9);
        assert_eq!(store.with(|v| v * 2), 18);
    }
}
