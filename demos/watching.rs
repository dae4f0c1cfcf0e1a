//! Basic signal watching example

use curbside::Signal;

fn main() {
    println!("=== Basic Signal Example ===\n");

    // Create a signal with initial value
    let count = Signal::new(0);

    // Watch it; the callback runs immediately, then on every change
    let guard = count.watch(|n| {
        println!("Count is now: {}", n);
    });

    println!("Setting count to 5...");
    count.set(5);

    println!("Updating count by adding 3...");
    count.update(|n| *n += 3);

    // Derive a second signal from the first
    let doubled = count.map(|n| n * 2);
    println!("Doubled is: {}", doubled.get());

    println!("Dropping the watcher; further changes are silent");
    drop(guard);
    count.set(100);
    println!("Count ended at: {}", count.get());
}
