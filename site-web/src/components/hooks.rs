//! Bridge from [`lib_store::Store`] to leptos signals.

use leptos::prelude::*;
use lib_store::Store;

/// Read-only signal that follows `store`.
///
/// The store subscription is dropped when the calling reactive owner is
/// cleaned up. Should the signal be disposed first, the subscriber's
/// `try_set` turns into a no-op.
pub fn use_store<T: Clone + 'static>(store: &Store<T>) -> ReadSignal<T, LocalStorage> {
    let signal = RwSignal::new_local(store.get());

    let unsubscribe = store.subscribe(move |value: &T| {
        let _ = signal.try_set(value.clone());
    });
    let unsubscribe = StoredValue::new_local(unsubscribe);
    on_cleanup(move || {
        unsubscribe.try_with_value(|handle| handle.unsubscribe());
    });

    signal.read_only()
}
