use crate::store::Subscription;

/// Contract for reading and observing a store's value.
///
/// `Binding` only requires this half of the contract, so read-side consumers
/// can be handed a store without gaining write access.
pub trait Readable<T> {
    /// Read the current value.
    fn get(&self) -> T;

    /// Register a listener that runs on every subsequent write.
    ///
    /// The listener is not invoked with the current value at registration
    /// time; callers that need it read via [`get`](Readable::get) first.
    /// The returned [`Subscription`] removes the listener when cancelled
    /// or dropped.
    fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription;
}

/// Contract for writing a store's value.
pub trait Writable<T> {
    /// Replace the current value, notifying all listeners before returning.
    fn set(&self, value: T);
}
