//! Observable value containers.
//!
//! This module provides the store side of the crate:
//! - `Store<T>`: a shared single-value slot that notifies subscribers on write
//! - `Readable<T>` / `Writable<T>`: the contract adapters are written against
//! - `Subscription`: RAII token that removes a listener when cancelled or dropped

mod store;
mod subscription;
mod traits;

pub use store::Store;
pub use subscription::Subscription;
pub use traits::{Readable, Writable};
