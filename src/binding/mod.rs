//! Consumer-side store bindings.

mod binding;

pub use binding::Binding;
