//! Build script for stagetime.
//!
//! Emits build-time diagnostics for feature combinations so a
//! misconfigured instrumentation build is visible at compile time
//! rather than as silently missing measurements.

use std::env;

fn main() {
    // Re-run if features change
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_TIMING");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_TIMING_EXTENDED");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_BUCKET_PIC_TYPES");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_BUCKET_BLOCKS");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_BUCKET_SHAPES");

    let timing = env::var("CARGO_FEATURE_TIMING").is_ok();
    let extended = env::var("CARGO_FEATURE_TIMING_EXTENDED").is_ok();
    let bucket_axes = ["BUCKET_PIC_TYPES", "BUCKET_BLOCKS", "BUCKET_SHAPES"]
        .iter()
        .filter(|f| env::var(format!("CARGO_FEATURE_{f}")).is_ok())
        .count();

    if timing && extended {
        println!(
            "cargo:warning=stagetime: both `timing` and `timing-extended` are enabled; \
             ActiveClock is the bucketed clock"
        );
    }

    if !timing && !extended {
        println!(
            "cargo:warning=stagetime: no timing variant enabled; ActiveClock is the no-op \
             clock and the profile_* macros expand to nothing"
        );
    }

    if bucket_axes > 0 && !extended {
        println!(
            "cargo:warning=stagetime: bucket-* axis features have no effect without \
             `timing-extended`"
        );
    }

    if bucket_axes > 1 {
        println!(
            "cargo:warning=stagetime: multiple bucket-* axis features enabled; precedence \
             is shapes > blocks > pic-types"
        );
    }
}
