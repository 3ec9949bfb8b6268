use crate::store::{Readable, Subscription};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

struct BindingShared<T> {
    value: RwLock<T>,
    epoch: AtomicU64,
}

/// Mirrors one store's value for one consumer.
///
/// A binding reads the store's current value at construction, then keeps its
/// local copy in sync by subscription: every write to the store replaces the
/// mirrored value and bumps the binding's [`epoch`](Binding::epoch) counter.
/// The epoch is how a consumer notices change without polling the value for
/// equality; emissions are never deduplicated, so writing an equal value
/// still advances it.
///
/// The subscription is owned exclusively by the binding and is released
/// exactly once, on drop or when [`rebind`](Binding::rebind) moves the
/// binding to another store. Bindings are therefore not `Clone`; bind one per
/// consumer instead, any number of bindings may target the same store.
///
/// # Examples
///
/// ```
/// use tether::{Binding, Store};
///
/// let store = Store::new(0);
/// let binding = Binding::new(&store);
/// assert_eq!(binding.get(), 0);
///
/// store.set(42);
/// assert_eq!(binding.get(), 42);
/// assert_eq!(binding.epoch(), 1);
/// ```
pub struct Binding<T> {
    shared: Arc<BindingShared<T>>,
    subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Bind to a store, snapshotting its current value.
    ///
    /// The snapshot is taken synchronously, so the binding never exposes a
    /// placeholder value. Binds are expected to happen on the thread that
    /// owns the consumer; writes from other threads are picked up through
    /// the subscription from that point on.
    pub fn new(store: &impl Readable<T>) -> Self {
        let shared = Arc::new(BindingShared {
            value: RwLock::new(store.get()),
            epoch: AtomicU64::new(0),
        });
        let subscription = Self::attach(&shared, store);
        debug!("binding attached");
        Self {
            shared,
            subscription,
        }
    }

    fn attach(shared: &Arc<BindingShared<T>>, store: &impl Readable<T>) -> Subscription {
        let slot = Arc::clone(shared);
        store.subscribe(move |value| {
            *slot.value.write().unwrap() = value.clone();
            slot.epoch.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Get a clone of the mirrored value.
    pub fn get(&self) -> T {
        self.shared.value.read().unwrap().clone()
    }

    /// Read the mirrored value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.shared.value.read().unwrap();
        f(&value)
    }

    /// Number of changes observed since construction.
    ///
    /// Advances once per store emission and once per [`rebind`](Binding::rebind).
    pub fn epoch(&self) -> u64 {
        self.shared.epoch.load(Ordering::SeqCst)
    }

    /// Move the binding to a different store.
    ///
    /// The old subscription is torn down before the new one is created, so
    /// the binding never holds two subscriptions and never leaks a listener.
    /// The mirrored value is re-snapshotted from the new store and the epoch
    /// advances once.
    pub fn rebind(&mut self, store: &impl Readable<T>) {
        self.subscription.cancel();
        *self.shared.value.write().unwrap() = store.get();
        self.shared.epoch.fetch_add(1, Ordering::SeqCst);
        self.subscription = Self::attach(&self.shared, store);
        debug!("binding moved to new store");
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &*self.shared.value.read().unwrap())
            .field("epoch", &self.shared.epoch.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn snapshots_current_value_at_bind_time() {
        let store = Store::new(0);
        store.set(42);

        let binding = Binding::new(&store);
        assert_eq!(binding.get(), 42);
        assert_eq!(binding.epoch(), 0);
    }

    #[test]
    fn tracks_writes_in_order() {
        let store = Store::new(0);
        let binding = Binding::new(&store);

        for value in [1, 2, 3, 4, 5] {
            store.set(value);
            assert_eq!(binding.get(), value);
        }
        assert_eq!(binding.epoch(), 5);
    }

    #[test]
    fn equal_value_writes_still_advance_epoch() {
        let store = Store::new(7);
        let binding = Binding::new(&store);

        store.set(7);
        store.set(7);
        assert_eq!(binding.get(), 7);
        assert_eq!(binding.epoch(), 2);
    }

    #[test]
    fn drop_unsubscribes() {
        let store = Store::new(0);
        let binding = Binding::new(&store);
        assert_eq!(store.listener_count(), 1);

        drop(binding);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn rebind_releases_old_subscription_first() {
        let first = Store::new(1);
        let second = Store::new(2);

        let mut binding = Binding::new(&first);
        assert_eq!(first.listener_count(), 1);

        binding.rebind(&second);
        assert_eq!(first.listener_count(), 0);
        assert_eq!(second.listener_count(), 1);
        assert_eq!(binding.get(), 2);

        // Writes to the old store no longer reach the binding.
        first.set(99);
        assert_eq!(binding.get(), 2);

        second.set(3);
        assert_eq!(binding.get(), 3);
    }

    #[test]
    fn two_bindings_observe_the_same_store_independently() {
        let store = Store::new(0);
        let left = Binding::new(&store);
        let right = Binding::new(&store);

        store.set(10);
        assert_eq!(left.get(), 10);
        assert_eq!(right.get(), 10);

        drop(left);
        store.set(20);
        assert_eq!(right.get(), 20);
    }

    #[test]
    fn with_reads_without_cloning() {
        let store = Store::new(String::from("hello"));
        let binding = Binding::new(&store);

        let len = binding.with(|value| value.len());
        assert_eq!(len, 5);
    }
}
