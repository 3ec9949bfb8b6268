//! Property test: a binding observes every write, in order, with no
//! duplicates beyond what the store emits.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use tether::{Binding, Store};

proptest! {
    #[test]
    fn observed_sequence_equals_written_sequence(
        values in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let store = Store::new(0i32);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let _subscription = store.subscribe(move |value| {
            seen_clone.lock().unwrap().push(*value);
        });

        let binding = Binding::new(&store);
        for value in &values {
            store.set(*value);
            prop_assert_eq!(binding.get(), *value);
        }

        prop_assert_eq!(&*seen.lock().unwrap(), &values);
        prop_assert_eq!(binding.epoch(), values.len() as u64);
    }
}
