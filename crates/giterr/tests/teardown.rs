//! Records are released when their thread exits.
//!
//! Kept alone in its own test binary: `live_records()` is process-wide.

use std::thread;

use giterr::codes::*;

#[test]
fn thread_exit_releases_record() {
    let baseline = giterr::live_records();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                // Overwrites must not accumulate either.
                for round in 0..10 {
                    giterr::report(GITERR_OBJECT, &format!("worker {i} round {round}"));
                }
                assert!(giterr::is_set());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(giterr::live_records(), baseline);

    // Same thread: overwrite and clear keep the count bounded.
    giterr::report(GITERR_TREE, "one");
    giterr::report(GITERR_TREE, "two");
    assert_eq!(giterr::live_records(), baseline + 1);

    let view = giterr::last().unwrap();
    giterr::clear();
    assert_eq!(giterr::live_records(), baseline + 1, "held view keeps its record");
    drop(view);
    assert_eq!(giterr::live_records(), baseline);

    giterr::report_oom();
    assert_eq!(giterr::live_records(), baseline, "placeholder is static");
}
