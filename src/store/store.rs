use crate::store::{Readable, Subscription, Writable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};
use tracing::{debug, trace};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct StoreInner<T> {
    value: RwLock<T>,
    // Registration order is notification order.
    listeners: RwLock<Vec<(usize, Listener<T>)>>,
    next_id: AtomicUsize,
}

/// A thread-safe observable container for a single value.
///
/// Every write notifies all registered listeners synchronously, in
/// registration order, before the write call returns. Writes never compare
/// against the previous value: setting an equal value still notifies.
///
/// Handles are cheap to clone and share one slot, so a store can outlive any
/// individual consumer.
///
/// # Examples
///
/// ```
/// use tether::Store;
///
/// let count = Store::new(0);
/// assert_eq!(count.get(), 0);
///
/// count.set(42);
/// assert_eq!(count.get(), 42);
///
/// count.update(|n| *n += 1);
/// assert_eq!(count.get(), 43);
/// ```
pub struct Store<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                value: RwLock::new(initial),
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicUsize::new(0),
            }),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().unwrap().clone()
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.inner.value.read().unwrap();
        f(&value)
    }

    /// Set a new value and notify all listeners.
    pub fn set(&self, new_value: T) {
        *self.inner.value.write().unwrap() = new_value;
        self.notify();
    }

    /// Update the value in place and notify all listeners.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut value = self.inner.value.write().unwrap();
            f(&mut value);
            // Release the write lock before notifying
        }
        self.notify();
    }

    /// Subscribe to value changes.
    ///
    /// The listener runs on every subsequent write, on the writer's thread,
    /// before the write returns. It is not called with the current value at
    /// registration time. The returned [`Subscription`] removes the listener
    /// when cancelled or dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    /// use tether::Store;
    ///
    /// let store = Store::new(0);
    /// let seen = Arc::new(AtomicI32::new(-1));
    /// let seen_clone = seen.clone();
    ///
    /// let _subscription = store.subscribe(move |value| {
    ///     seen_clone.store(*value, Ordering::SeqCst);
    /// });
    ///
    /// store.set(7);
    /// assert_eq!(seen.load(Ordering::SeqCst), 7);
    /// ```
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner
            .listeners
            .write()
            .unwrap()
            .push((id, Arc::new(listener)));
        debug!(listener = id, "store listener subscribed");

        let inner: Weak<StoreInner<T>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            // Store already gone means there is nothing to remove.
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .write()
                    .unwrap()
                    .retain(|(listener_id, _)| *listener_id != id);
                debug!(listener = id, "store listener removed");
            }
        })
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().unwrap().len()
    }

    /// Notify all listeners with the current value.
    fn notify(&self) {
        // Snapshot the listener list and the value, then run the callbacks
        // with no locks held so a listener may subscribe or cancel reentrantly.
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        if listeners.is_empty() {
            return;
        }

        let value = self.inner.value.read().unwrap().clone();
        trace!(listeners = listeners.len(), "notifying store listeners");
        for listener in &listeners {
            listener(&value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Readable<T> for Store<T> {
    fn get(&self) -> T {
        Store::get(self)
    }

    fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        Store::subscribe(self, listener)
    }
}

impl<T: Clone + Send + Sync + 'static> Writable<T> for Store<T> {
    fn set(&self, value: T) {
        Store::set(self, value)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.inner.value.read().unwrap())
            .finish()
    }
}
