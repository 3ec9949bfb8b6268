//! Fan-out walkthrough: many bindings on one store, writes from another thread

use std::thread;
use tether::{Binding, Store};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Fan-out ===\n");

    let price = Store::new(100);
    let bindings: Vec<Binding<i32>> = (0..4).map(|_| Binding::new(&price)).collect();

    println!("1. Writing from a worker thread");
    let writer = {
        let price = price.clone();
        thread::spawn(move || {
            for delta in [5, -3, 12] {
                price.update(|p| *p += delta);
            }
        })
    };
    writer.join().unwrap();

    println!("2. Every binding observed every write");
    for (i, binding) in bindings.iter().enumerate() {
        println!(
            "   binding {i}: value {} after {} changes",
            binding.get(),
            binding.epoch()
        );
    }
}
