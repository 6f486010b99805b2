//! Writer/reader demo over one shared queue.
//!
//! # Usage
//!
//! ```sh
//! cargo run --features tracing --bin queue_demo -- --capacity 5 --count 10
//! ```
//!
//! Writer pushes `0..count` with a fixed delay between pushes. Reader makes
//! `count` timed pops and logs timeouts instead of stopping on them.

use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use bounded_queue::{BoundedQueue, QueueError};

/// Run one writer and one reader thread against a bounded queue.
#[derive(Parser, Debug)]
#[command(name = "queue_demo")]
#[command(about = "Bounded ring buffer queue producer/consumer demo")]
struct Cli {
    /// Queue capacity. Pushing into a full queue drops the oldest element.
    #[arg(long, default_value_t = 5)]
    capacity: usize,

    /// Number of values the writer pushes and the reader tries to pop.
    #[arg(long, default_value_t = 10)]
    count: u64,

    /// Writer sleep between pushes, in milliseconds.
    #[arg(long, default_value_t = 100)]
    push_delay_ms: u64,

    /// Reader wait bound per pop, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pop_timeout_ms: u64,
}

fn main() {
    bounded_queue::trace::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("queue_demo: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), QueueError> {
    let queue = Arc::new(BoundedQueue::<u64>::new(cli.capacity)?);
    info!(capacity = queue.capacity(), count = cli.count, "starting demo");

    let writer = {
        let queue = Arc::clone(&queue);
        let count = cli.count;
        let delay = Duration::from_millis(cli.push_delay_ms);
        thread::Builder::new()
            .name("writer".into())
            .spawn(move || {
                for i in 0..count {
                    info!(value = i, "pushed");
                    queue.push(i);
                    thread::sleep(delay);
                }
            })
    };

    let reader = {
        let queue = Arc::clone(&queue);
        let count = cli.count;
        let timeout = Duration::from_millis(cli.pop_timeout_ms);
        thread::Builder::new()
            .name("reader".into())
            .spawn(move || {
                for _ in 0..count {
                    match queue.pop_with_timeout(timeout) {
                        Ok(value) => info!(value, "popped"),
                        Err(err) => warn!(%err, "pop failed"),
                    }
                }
            })
    };

    for handle in [writer, reader] {
        match handle {
            Ok(handle) => {
                if handle.join().is_err() {
                    warn!("demo thread panicked");
                }
            }
            Err(err) => warn!(%err, "failed to spawn demo thread"),
        }
    }

    info!(remaining = queue.count(), "demo finished");
    Ok(())
}
