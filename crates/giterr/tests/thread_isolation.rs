//! Cross-thread behaviour of the error slot.

use std::sync::{Arc, Barrier};
use std::thread;

use giterr::codes::*;
use giterr::ErrorClass;

const THREADS: usize = 16;
const ROUNDS: usize = 200;

fn class_for(i: usize) -> ErrorClass {
    BUILTIN_CLASSES[i % BUILTIN_CLASSES.len()]
}

#[test]
fn each_thread_sees_only_its_own_record() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for round in 0..ROUNDS {
                    let msg = format!("thread {t} round {round}");
                    giterr::report(class_for(t), &msg);
                    thread::yield_now();

                    let err = giterr::last().expect("own report must be visible");
                    assert_eq!(err.message(), msg);
                    assert_eq!(err.class(), class_for(t));
                }
                giterr::last().map(|e| e.message().to_string())
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let last = handle.join().expect("worker panicked");
        assert_eq!(last, Some(format!("thread {t} round {}", ROUNDS - 1)));
    }

    // The test thread reported nothing.
    assert!(giterr::last().is_none());
}

#[test]
fn clear_on_one_thread_leaves_others_set() {
    let reported = Arc::new(Barrier::new(2));
    let cleared = Arc::new(Barrier::new(2));

    let keeper = {
        let reported = Arc::clone(&reported);
        let cleared = Arc::clone(&cleared);
        thread::spawn(move || {
            giterr::report(GITERR_REPOSITORY, "not a repository");
            reported.wait();
            cleared.wait();
            giterr::last().map(|e| (e.message().to_string(), e.class()))
        })
    };

    let clearer = {
        let reported = Arc::clone(&reported);
        let cleared = Arc::clone(&cleared);
        thread::spawn(move || {
            giterr::report(GITERR_NET, "connection reset");
            reported.wait();
            giterr::clear_current_error();
            cleared.wait();
            giterr::is_set()
        })
    };

    assert_eq!(
        keeper.join().unwrap(),
        Some(("not a repository".to_string(), GITERR_REPOSITORY))
    );
    assert!(!clearer.join().unwrap());
}

#[test]
fn describe_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                giterr::registry::entries()
                    .map(|e| giterr::describe(e.code))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<_> = giterr::registry::entries()
        .map(|e| giterr::describe(e.code))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
