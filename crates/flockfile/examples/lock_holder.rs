//! Helper binary that locks, writes markers, holds, releases
//!
//! Usage: lock_holder <lock_path> <marker_path> <process_id>
//!
//! Writes an "acquired" marker after taking the lock and a "released" marker
//! just before giving it up. With working exclusion the markers of concurrent
//! processes never interleave.

use flockfile::{Closer, LockedFile, Locker};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: lock_holder <lock_path> <marker_path> <process_id>");
        std::process::exit(1);
    }

    let lock_path = PathBuf::from(&args[1]);
    let marker_path = PathBuf::from(&args[2]);
    let process_id = &args[3];

    let lock = LockedFile::open(&lock_path).expect("Failed to open lock file");
    lock.lock();

    let mut marker = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&marker_path)
        .expect("Failed to open marker file");

    writeln!(marker, "process_{} acquired", process_id).expect("Failed to write marker");

    // Hold long enough for the other processes to queue up
    std::thread::sleep(Duration::from_millis(100));

    writeln!(marker, "process_{} released", process_id).expect("Failed to write marker");

    lock.unlock();
    lock.close().expect("Failed to close lock file");
    println!("Process {} completed", process_id);
}
