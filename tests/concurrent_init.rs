//! Concurrent First-Use Test Suite
//!
//! Validates that threads racing through an uninitialized shared resolver all
//! observe a fully-built, correct table and that the table is constructed
//! exactly once. This binary deliberately touches no other diagnostic
//! resolver so the process-wide build counter stays meaningful.
//!
//! Run with: cargo test --test concurrent_init

use std::sync::{Arc, Barrier};
use std::thread;

use lazy_static::lazy_static;
use vk_stringify::{table_build_count, NameResolver, ResolveMode, StructureType};

lazy_static! {
    // Same one-time-init primitive the process-wide stringify() entry point
    // uses, with the mode pinned so the test behaves identically under debug
    // and release profiles.
    static ref SHARED: NameResolver = NameResolver::new(ResolveMode::Diagnostic);
}

/// Tags every racing thread probes, with the names they must observe.
const PROBES: &[(StructureType, &str)] = &[
    (0, "VK_STRUCTURE_TYPE_APPLICATION_INFO"),
    (28, "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO"),
    (1_000_001_000, "VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"),
    (1_000_128_004, "VK_STRUCTURE_TYPE_DEBUG_UTILS_MESSENGER_CREATE_INFO_EXT"),
];

#[test]
fn test_racing_first_callers_share_one_table() {
    const THREADS: usize = 16;

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = Vec::with_capacity(THREADS);

    for _ in 0..THREADS {
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            // Line everyone up so the very first resolve calls race into
            // lazy_static initialization together.
            barrier.wait();

            for &(value, name) in PROBES {
                assert_eq!(SHARED.resolve(value), name);
            }
            assert_eq!(SHARED.resolve(999_999_999), "999999999");
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // One construction for the whole process, no matter how many threads
    // raced in first.
    assert_eq!(table_build_count(), 1);

    let stats = SHARED.stats();
    assert_eq!(stats.lookups, (THREADS * (PROBES.len() + 1)) as u64);
    assert_eq!(stats.misses, THREADS as u64);
}
