use crate::store::Writable;
use tracing::debug;

/// One (store, value) pair, ready to be applied any number of times.
///
/// The store handle and the value are captured by clone, so seeds targeting
/// stores of different value types can live in the same list.
///
/// # Examples
///
/// ```
/// use tether::{Seed, Store};
///
/// let count = Store::new(0);
/// let label = Store::new(String::new());
///
/// let seeds = vec![
///     Seed::new(&count, 10),
///     Seed::new(&label, String::from("ready")),
/// ];
/// assert_eq!(seeds.len(), 2);
/// ```
pub struct Seed {
    write: Box<dyn Fn() + Send + Sync>,
}

impl Seed {
    /// Capture a store handle and the value to apply to it.
    pub fn new<T, S>(store: &S, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
        S: Writable<T> + Clone + Send + Sync + 'static,
    {
        let store = store.clone();
        Self {
            write: Box::new(move || store.set(value.clone())),
        }
    }

    fn apply(&self) {
        (self.write)();
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed")
    }
}

/// Applies an ordered list of seeds to their stores.
///
/// Construction applies the list once; [`replace`](Seeder::replace) swaps in
/// a new list and applies it again. Both passes set every pair's value
/// unconditionally, so a pass is a "reset to these values", not set-if-absent:
/// stores written externally in between are overwritten.
///
/// Pairs are applied in list order with no deduplication, so when the same
/// store appears twice the later pair wins.
///
/// # Examples
///
/// ```
/// use tether::{Seed, Seeder, Store};
///
/// let a = Store::new(0);
/// let b = Store::new(0);
///
/// let _seeder = Seeder::new(vec![Seed::new(&a, 1), Seed::new(&b, 2)]);
/// assert_eq!(a.get(), 1);
/// assert_eq!(b.get(), 2);
/// ```
#[derive(Debug)]
pub struct Seeder {
    seeds: Vec<Seed>,
}

impl Seeder {
    /// Create a seeder and apply every seed once, in order.
    pub fn new(seeds: Vec<Seed>) -> Self {
        let seeder = Self { seeds };
        seeder.apply();
        seeder
    }

    /// Swap in a new seed list and apply it.
    ///
    /// The previous list is discarded; its values are not reverted.
    pub fn replace(&mut self, seeds: Vec<Seed>) {
        self.seeds = seeds;
        self.apply();
    }

    /// Apply the current seed list once, in order.
    ///
    /// An empty list is a no-op. Writes across stores are sequential and
    /// non-atomic; if a store listener panics mid-pass, the panic propagates
    /// and the remaining seeds are not applied.
    pub fn apply(&self) {
        if self.seeds.is_empty() {
            return;
        }
        debug!(seeds = self.seeds.len(), "applying seed pass");
        for seed in &self.seeds {
            seed.apply();
        }
    }

    /// Number of seeds in the current list.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Whether the current list is empty.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
