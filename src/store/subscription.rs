/// RAII token for an active store subscription.
///
/// Returned by [`subscribe`](crate::Readable::subscribe). The listener stays
/// registered for as long as the token is alive; dropping the token or calling
/// [`cancel`](Subscription::cancel) removes it. Cancelling more than once is a
/// no-op, and a token that outlives its store is inert.
///
/// # Examples
///
/// ```
/// use tether::Store;
///
/// let store = Store::new(0);
/// let subscription = store.subscribe(|value| println!("now {value}"));
/// store.set(1); // listener runs
/// drop(subscription);
/// store.set(2); // listener is gone
/// ```
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a cancellation closure.
    ///
    /// The closure runs at most once, on the first cancel or on drop.
    /// Store implementations outside this crate use this to satisfy
    /// [`Readable::subscribe`](crate::Readable::subscribe).
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the listener now instead of waiting for drop.
    ///
    /// Safe to call repeatedly; only the first call does anything.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether the listener is still registered through this token.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn cancel_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let mut subscription = Subscription::new(move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(subscription.is_active());
        subscription.cancel();
        subscription.cancel();
        assert!(!subscription.is_active());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_after_cancel_is_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        {
            let mut subscription = Subscription::new(move || {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            });
            subscription.cancel();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
