//! Stress tests for concurrent delivery
//!
//! These tests verify:
//! - Lines written from many threads never interleave
//! - Rotation during concurrent writes loses and duplicates nothing

use log_pipeline::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn file_logger(path: &std::path::Path) -> Logger {
    Logger::from_config(
        Config::new()
            .with_level(Severity::Debug)
            .with_file(path.to_string_lossy()),
    )
    .expect("Failed to create logger")
}

/// Every line must be a complete JSON object with a unique (thread, seq) pair
fn collect_ids(content: &str, ids: &mut HashSet<(i64, i64)>) {
    for line in content.lines() {
        let parsed: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("torn line {:?}: {}", line, e));
        let thread = parsed["details"]["thread"].as_i64().expect("thread label");
        let seq = parsed["details"]["seq"].as_i64().expect("seq label");
        assert!(ids.insert((thread, seq)), "duplicate line {}/{}", thread, seq);
    }
}

fn spawn_writers(logger: &Logger) -> Vec<thread::JoinHandle<()>> {
    (0..THREADS)
        .map(|t| {
            let logger = logger.with_label("thread", t as i64);
            thread::spawn(move || {
                for seq in 0..PER_THREAD {
                    logger.info(
                        Entry::new("E_STRESS", "x".repeat(64 + seq % 200))
                            .with_label("seq", seq as i64),
                    );
                }
            })
        })
        .collect()
}

#[test]
fn test_concurrent_writes_do_not_interleave() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");
    let logger = file_logger(&log_file);

    for handle in spawn_writers(&logger) {
        handle.join().expect("writer thread panicked");
    }
    logger.close().unwrap();

    let mut ids = HashSet::new();
    collect_ids(&fs::read_to_string(&log_file).unwrap(), &mut ids);
    assert_eq!(ids.len(), THREADS * PER_THREAD);
}

#[test]
fn test_rotation_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("rotating.log");
    let logger = file_logger(&log_file);

    let done = Arc::new(AtomicBool::new(false));
    let rotator = {
        let logger = logger.clone();
        let done = Arc::clone(&done);
        let log_file = log_file.clone();
        let dir = temp_dir.path().to_path_buf();
        thread::spawn(move || {
            let mut generation = 0;
            while !done.load(Ordering::Acquire) && generation < 20 {
                generation += 1;
                fs::rename(&log_file, dir.join(format!("rotating.log.{}", generation)))
                    .expect("rename");
                logger.rotate().expect("rotate");
                thread::yield_now();
            }
            generation
        })
    };

    for handle in spawn_writers(&logger) {
        handle.join().expect("writer thread panicked");
    }
    done.store(true, Ordering::Release);
    let generations = rotator.join().expect("rotator panicked");
    logger.close().unwrap();

    let mut ids = HashSet::new();
    collect_ids(&fs::read_to_string(&log_file).unwrap(), &mut ids);
    for generation in 1..=generations {
        let rotated = temp_dir.path().join(format!("rotating.log.{}", generation));
        collect_ids(&fs::read_to_string(rotated).unwrap(), &mut ids);
    }
    assert_eq!(ids.len(), THREADS * PER_THREAD);
}
