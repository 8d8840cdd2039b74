//! Stress test - many elements through one pool
//!
//! Pushes millions of identical strings through a concurrent sink and
//! checks the exact count, timing the run.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

fn main() {
    println!("=== parslot Stress Test ===\n");

    let num_elements: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000_000);

    let d = parslot::global();
    println!(
        "Elements: {}, workers: {}\n",
        num_elements,
        d.workers()
    );

    let input = vec!["x".to_string(); num_elements];

    // Counting sink.
    let count = AtomicUsize::new(0);
    let start = Instant::now();
    parslot::for_each(&input, |_| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    let elapsed = start.elapsed();

    println!("Counted:  {}/{}", count.load(Ordering::Relaxed), num_elements);
    println!("Time:     {:?}", elapsed);
    println!(
        "Rate:     {:.0} elements/sec\n",
        num_elements as f64 / elapsed.as_secs_f64()
    );

    // Collecting sink (heavier: one lock per element).
    let sink = Mutex::new(Vec::with_capacity(num_elements));
    let start = Instant::now();
    parslot::for_each(&input, |s| {
        sink.lock().unwrap().push(s.len());
    })
    .unwrap();
    let elapsed = start.elapsed();

    println!("Collected: {}/{}", sink.into_inner().unwrap().len(), num_elements);
    println!("Time:      {:?}", elapsed);
    println!(
        "Idle workers after calls: {}/{}",
        d.idle_workers(),
        d.workers()
    );
}
