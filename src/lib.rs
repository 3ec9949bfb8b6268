//! # Tether
//!
//! Observable value stores with RAII subscription bindings and batch seeding.
//!
//! Tether provides two levels of abstraction for sharing mutable state:
//!
//! ## Stores (Value containers)
//!
//! - `Store<T>` - Thread-safe single-value container that notifies subscribers
//!   on every write
//! - `Readable<T>` / `Writable<T>` - The store contract, so adapters work with
//!   any conforming container
//! - `Subscription` - RAII unsubscribe token returned by `subscribe`
//!
//! ## Adapters (Consumer-side plumbing)
//!
//! - `Binding<T>` - Mirrors a store's value for a single consumer and counts
//!   change notifications; unsubscribes on drop
//! - `Seeder` - Applies an ordered list of (store, value) pairs, for seeding
//!   application state at startup or at reset points

pub mod binding;
pub mod seed;
pub mod store;

// Re-export main types for convenience
pub use binding::Binding;
pub use seed::{Seed, Seeder};
pub use store::{Readable, Store, Subscription, Writable};
