//! Per-class report counters.
//!
//! Enabled with `feature = "metrics"`. Cost per report: one
//! `AtomicU64::fetch_add(1, Relaxed)`.
//!
//! ```text
//! report(class, ..)
//!       │
//!       ▼  idx = class.id  (ids outside the table → overflow bucket)
//! COUNTERS[idx].fetch_add(1, Relaxed)
//!       │
//!       ▼  scrape
//! dump_prometheus()
//! ```

use core::sync::atomic::{AtomicU64, Ordering};

use crate::codes::{ErrorClass, BUILTIN_CLASSES};

/// Counter slots for class ids `0..MAX_CLASSES`. Extension classes with
/// larger ids share the overflow bucket.
pub const MAX_CLASSES: usize = 64;

const OVERFLOW: usize = MAX_CLASSES;

static COUNTERS: [AtomicU64; MAX_CLASSES + 1] = {
    const ZERO: AtomicU64 = AtomicU64::new(0);
    [ZERO; MAX_CLASSES + 1]
};

#[inline]
fn index(class: ErrorClass) -> usize {
    match usize::try_from(class.id) {
        Ok(idx) if idx < MAX_CLASSES => idx,
        _ => OVERFLOW,
    }
}

/// Count one report for `class`. Returns the previous count.
#[inline(always)]
pub fn bump(class: ErrorClass) -> u64 {
    COUNTERS[index(class)].fetch_add(1, Ordering::Relaxed)
}

/// Reports seen for `class` (or for the overflow bucket it maps to).
#[inline]
pub fn count(class: ErrorClass) -> u64 {
    COUNTERS[index(class)].load(Ordering::Relaxed)
}

/// Reports seen for classes outside the counter table.
pub fn overflow_count() -> u64 {
    COUNTERS[OVERFLOW].load(Ordering::Relaxed)
}

/// Reset all counters.
pub fn reset_all() {
    for counter in COUNTERS.iter() {
        counter.store(0, Ordering::Relaxed);
    }
}

/// Dump non-zero counters in OpenMetrics/Prometheus exposition format.
pub fn dump_prometheus() -> String {
    let mut out = String::from(
        "# HELP giterr_reports_total Errors reported per class\n\
         # TYPE giterr_reports_total counter\n",
    );
    for (idx, counter) in COUNTERS.iter().enumerate() {
        let n = counter.load(Ordering::Relaxed);
        if n == 0 {
            continue;
        }
        let label = if idx == OVERFLOW {
            "overflow"
        } else {
            BUILTIN_CLASSES.get(idx).map_or("unnamed", |c| c.name)
        };
        out.push_str(&format!(
            "giterr_reports_total{{class=\"{}\",id=\"{}\"}} {}\n",
            label, idx, n
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-wide; assertions only use deltas.

    #[test]
    fn bump_and_count() {
        let class = ErrorClass::new("metrics_test", 40);
        let before = count(class);
        bump(class);
        bump(class);
        assert_eq!(count(class), before + 2);
    }

    #[test]
    fn out_of_range_goes_to_overflow() {
        let before = overflow_count();
        bump(ErrorClass::new("huge", 10_000));
        bump(ErrorClass::new("negative", -1));
        assert!(overflow_count() >= before + 2);
    }

    #[test]
    fn report_bumps_class_counter() {
        let class = ErrorClass::new("metrics_report", 41);
        let before = count(class);
        crate::report(class, "counted");
        assert_eq!(count(class), before + 1);
    }

    #[test]
    fn prometheus_lists_builtin_names() {
        bump(crate::codes::GITERR_ODB);
        let dump = dump_prometheus();
        assert!(dump.contains("# TYPE giterr_reports_total counter"));
        assert!(dump.contains("class=\"GITERR_ODB\""), "{dump}");
    }
}
