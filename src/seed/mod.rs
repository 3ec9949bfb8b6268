//! Batch initialization of store values.

mod seed;

pub use seed::{Seed, Seeder};
