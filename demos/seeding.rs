//! Seeding walkthrough: applying initial values to a set of stores

use tether::{Binding, Seed, Seeder, Store};

#[derive(Clone, Debug)]
struct Session {
    user: String,
    logged_in: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Seeding ===\n");

    println!("1. Stores exist before their values do");
    let theme = Store::new(String::new());
    let session = Store::new(Session {
        user: String::new(),
        logged_in: false,
    });

    let theme_binding = Binding::new(&theme);
    let session_binding = Binding::new(&session);

    println!("2. One seed pass fills them all, in order");
    let mut seeder = Seeder::new(vec![
        Seed::new(&theme, String::from("dark")),
        Seed::new(
            &session,
            Session {
                user: String::from("ada"),
                logged_in: true,
            },
        ),
    ]);
    println!("   theme:   {}", theme_binding.get());
    println!("   session: {:?}", session_binding.get());

    println!("\n3. Replacing the list re-applies unconditionally");
    theme.set(String::from("light")); // external write in between
    seeder.replace(vec![Seed::new(&theme, String::from("dark"))]);
    println!("   theme after reset: {}", theme_binding.get());
}
