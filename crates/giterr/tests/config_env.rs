//! Environment settings seen by threads racing on first use. Lives in its
//! own binary so nothing has touched the configuration before the test.

use std::sync::{Arc, Barrier};
use std::thread;

use giterr::codes::*;

const THREADS: usize = 8;

#[test]
fn racing_first_reports_see_env_limit() {
    std::env::set_var(giterr::config::ENV_MAX_MESSAGE, "5");

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                giterr::report(GITERR_REFERENCE, &format!("reference {i} is not valid"));
                giterr::last().unwrap().message().to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "refer");
    }
    assert_eq!(giterr::config::current().max_message_len, 5);
}
