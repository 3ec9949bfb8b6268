//! Counter walkthrough: one store, one binding, external writes

use tether::{Binding, Store};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Counter ===\n");

    println!("1. Creating a counter store");
    let count = Store::new(0);

    // Log every write
    let _logger = count.subscribe(|value| {
        println!("   [store] count is now {value}");
    });

    println!("2. Binding a consumer");
    let binding = Binding::new(&count);
    println!("   bound value: {}", binding.get());

    println!("\n3. Writing from elsewhere in the application");
    for _ in 0..3 {
        count.update(|n| *n += 1);
        println!("   binding sees: {} (epoch {})", binding.get(), binding.epoch());
    }

    println!("\n4. Dropping the binding releases its subscription");
    drop(binding);
    count.set(100);
    println!("   listeners left: {}", count.listener_count());
}
