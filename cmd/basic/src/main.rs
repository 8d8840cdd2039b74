//! Basic parslot example
//!
//! Demonstrates the free-function API and index coverage.
//!
//! # Environment Variables
//!
//! - `PSL_WORKERS=<n>` - Override the detected core count
//! - `PSL_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)

use std::collections::HashSet;
use std::sync::Mutex;

// PSL_LOG_LEVEL=debug cargo run -p parslot-basic
fn main() {
    println!("=== parslot Basic Example ===\n");

    let d = parslot::global();
    println!("Pool size: {} workers\n", d.workers());

    // Three "Foo"s into a shared sink.
    let input = vec!["Foo".to_string(), "Foo".to_string(), "Foo".to_string()];
    let sink = Mutex::new(Vec::new());

    parslot::for_each(&input, |s| {
        sink.lock().unwrap().push(s.clone());
    })
    .unwrap();

    let out = sink.into_inner().unwrap();
    println!("Collected {} elements: {:?}", out.len(), out);

    // Tag each element with its index and check exact coverage.
    let n = 1000;
    let indices: Vec<usize> = (0..n).collect();
    let visited = Mutex::new(HashSet::new());

    parslot::for_each(&indices, |i| {
        visited.lock().unwrap().insert(*i);
    })
    .unwrap();

    let visited = visited.into_inner().unwrap();
    println!(
        "Visited {}/{} indices exactly once: {}",
        visited.len(),
        n,
        visited.len() == n
    );

    println!(
        "Idle workers after calls: {}/{}",
        d.idle_workers(),
        d.workers()
    );
}
