//! Counter helper that keeps the counter inside the locked file itself
//!
//! Usage: counter_child_locked <counter_path> <iterations>
//!
//! Each iteration locks, seeks to the start, reads the decimal value, writes
//! the incremented value back and unlocks. The value only grows, so
//! overwriting from byte 0 never leaves stale trailing digits.

use flockfile::{Closer, LockedFile, Locker, Whence};
use std::env;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: counter_child_locked <counter_path> <iterations>");
        std::process::exit(1);
    }

    let counter_path = PathBuf::from(&args[1]);
    let iterations: usize = args[2].parse().expect("iterations must be a number");

    let mut counter = LockedFile::open(&counter_path).expect("Failed to open counter file");

    for _ in 0..iterations {
        let mut guard = counter.lock_guard();

        guard.seek_to(0, Whence::Start).expect("Failed to rewind");
        let mut content = String::new();
        guard
            .read_to_string(&mut content)
            .expect("Failed to read counter file");
        let value: u32 = if content.trim().is_empty() {
            0
        } else {
            content
                .trim()
                .parse()
                .expect("Counter file should contain a number")
        };

        // Widen the race window
        std::thread::sleep(Duration::from_micros(10));

        guard.seek_to(0, Whence::Start).expect("Failed to rewind");
        guard
            .write_all((value + 1).to_string().as_bytes())
            .expect("Failed to write counter file");
    }

    counter.close().expect("Failed to close counter file");
    println!("Counter child completed {} iterations", iterations);
}
